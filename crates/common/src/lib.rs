/// Sysdash - 公共库
/// 
/// 提供 Server 使用的数据模型、错误处理、输入校验与工具函数

pub mod errors;
pub mod models;
pub mod utils;
pub mod validation;

// 重新导出常用类型
pub use errors::{Error, Result};
pub use models::{ApiAck, ApiInput, MetricsReport, ValidationOutcome};
