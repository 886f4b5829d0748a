/// 输入校验接口

use axum::{extract::rejection::JsonRejection, Json};
use common::{
    models::constants::INVALID_INPUT, validation::validate_input, ApiAck, ApiInput,
};
use serde_json::Value;
use tracing::debug;

use crate::errors::ApiError;

/// 提交输入
///
/// POST /api
///
/// 标签过滤只是粗粒度的输入筛查，不能替代渲染时的输出转义
pub async fn submit_input(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiAck>, ApiError> {
    let input = match payload {
        Ok(Json(body)) => ApiInput::from_json(&body).input,
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            None
        }
    };

    let outcome = validate_input(input.as_deref());
    if outcome.is_accepted() {
        return Ok(Json(ApiAck::received()));
    }

    Err(ApiError::BadRequest(
        outcome.rejection_message().unwrap_or(INVALID_INPUT),
    ))
}
