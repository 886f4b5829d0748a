/// 共享数据模型
///
/// 定义请求与响应中使用的数据结构

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::format_percent;

/// 性能指标报告
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsReport {
    pub cpu_usage: String,
    pub memory_usage: String,
    pub disk_usage: String,
}

impl MetricsReport {
    /// 由原始百分比构造报告
    pub fn from_percentages(cpu: f64, memory: f64, disk: f64) -> Self {
        Self {
            cpu_usage: format_percent(cpu),
            memory_usage: format_percent(memory),
            disk_usage: format_percent(disk),
        }
    }
}

/// `/api` 请求体
///
/// 只接受 JSON 对象，数组等其他形式一律视为缺少字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiInput {
    pub input: Option<String>,
}

impl ApiInput {
    pub fn from_json(body: &Value) -> Self {
        let input = body
            .as_object()
            .and_then(|obj| obj.get("input"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self { input }
    }
}

/// `/api` 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiAck {
    pub message: String,
    pub status: String,
}

impl ApiAck {
    pub fn received() -> Self {
        Self {
            message: constants::INPUT_RECEIVED.to_string(),
            status: "success".to_string(),
        }
    }
}

/// 输入校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    RejectedMissingField,
    RejectedForbiddenPattern,
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// 拒绝时返回给客户端的消息
    pub fn rejection_message(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::RejectedMissingField => Some(constants::INVALID_INPUT),
            ValidationOutcome::RejectedForbiddenPattern => Some(constants::INVALID_CHARACTERS),
        }
    }
}

/// 常量定义
pub mod constants {
    /// 默认监听地址
    pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5050);

    /// 默认 CPU 采样窗口（秒）
    pub const DEFAULT_CPU_SAMPLE_SECS: u64 = 2;

    /// 磁盘使用率统计的挂载点
    pub const ROOT_MOUNT_POINT: &str = "/";

    pub const INPUT_RECEIVED: &str = "Input received";
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const INVALID_CHARACTERS: &str = "Invalid characters detected";
    pub const METRICS_UNAVAILABLE: &str = "Unable to retrieve performance metrics";
}
