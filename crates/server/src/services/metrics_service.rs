/// 性能指标服务

use common::{Error, MetricsReport, Result};

use crate::app_state::AppState;

pub struct MetricsService {
    state: AppState,
}

impl MetricsService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// 采集系统指标
    ///
    /// CPU 采样窗口在阻塞线程池中执行，只占用当前请求
    pub async fn sample(&self) -> Result<MetricsReport> {
        let collector = self.state.collector();
        tokio::task::spawn_blocking(move || collector.sample())
            .await
            .map_err(|e| Error::Internal(format!("metrics sampling task failed: {}", e)))?
    }
}
