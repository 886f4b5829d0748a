/// 应用全局状态

use std::sync::Arc;

use crate::config::Config;
use crate::metrics::{MetricsCollector, SystemSource};

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 启动时加载的配置，只读共享
    pub config: Arc<Config>,
    /// 系统指标收集器
    pub collector: MetricsCollector,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn SystemSource>) -> Self {
        let collector = MetricsCollector::new(source, config.cpu_sample_window());
        Self {
            config: Arc::new(config),
            collector,
        }
    }

    /// 获取配置
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// 获取指标收集器（克隆）
    pub fn collector(&self) -> MetricsCollector {
        self.collector.clone()
    }
}
