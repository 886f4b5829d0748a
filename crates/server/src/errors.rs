/// API 错误与响应映射

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::models::constants::METRICS_UNAVAILABLE;
use serde::Serialize;

/// API 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 客户端输入错误，消息直接返回
    BadRequest(&'static str),
    /// 指标采集失败，细节只写日志
    MetricsUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MetricsUnavailable => (StatusCode::INTERNAL_SERVER_ERROR, METRICS_UNAVAILABLE),
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}
