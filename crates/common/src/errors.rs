use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("配置错误: {0}")]
    Config(String),

    /// 系统指标采集失败，消息原样保留以便写入日志
    #[error("{0}")]
    Metrics(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 统一结果类型
pub type Result<T> = std::result::Result<T, Error>;
