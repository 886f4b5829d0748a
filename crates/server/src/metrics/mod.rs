/// 系统指标模块

pub mod collector;
pub mod source;

pub use collector::MetricsCollector;
pub use source::{HostSource, SystemSource};
