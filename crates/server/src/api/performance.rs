/// 性能指标接口

use axum::{extract::State, Json};
use common::MetricsReport;
use tracing::error;

use crate::{app_state::AppState, errors::ApiError, services::metrics_service::MetricsService};

/// 获取实时性能数据
///
/// GET /performance-data
pub async fn performance_data(
    State(state): State<AppState>,
) -> Result<Json<MetricsReport>, ApiError> {
    let service = MetricsService::new(state);
    match service.sample().await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!("Error fetching performance metrics: {}", e);
            Err(ApiError::MetricsUnavailable)
        }
    }
}
