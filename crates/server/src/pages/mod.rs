/// 页面处理器
///
/// 页面在编译期嵌入，错误页是唯一带动态内容的页面

use std::any::Any;

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tower_http::catch_panic::ResponseForPanic;
use tracing::{error, warn};

const INDEX_PAGE: &str = include_str!("../../templates/index.html");
const PERFORMANCE_PAGE: &str = include_str!("../../templates/performance.html");
const HEALTH_PAGE: &str = include_str!("../../templates/health.html");
const NOT_FOUND_PAGE: &str = include_str!("../../templates/404.html");
const ERROR_PAGE: &str = include_str!("../../templates/error.html");

/// 未开启调试模式时展示的错误信息
const GENERIC_ERROR: &str = "Internal server error";

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn performance() -> Html<&'static str> {
    Html(PERFORMANCE_PAGE)
}

pub async fn health() -> Html<&'static str> {
    Html(HEALTH_PAGE)
}

/// 未匹配路由
pub async fn not_found(uri: Uri) -> (StatusCode, Html<&'static str>) {
    warn!("Page not found: {}", uri);
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// 渲染 500 错误页，消息会做 HTML 转义
pub fn render_error(message: &str) -> Html<String> {
    Html(ERROR_PAGE.replace("{{error}}", &html_escape::encode_safe(message)))
}

/// 处理器 panic 时返回的错误页
#[derive(Debug, Clone, Copy)]
pub struct PanicPage {
    /// 为 true 时展示真实错误信息
    pub debug: bool,
}

impl PanicPage {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl ResponseForPanic for PanicPage {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let message = panic_message(err.as_ref());
        error!("Unhandled error: {}", message);

        let shown = if self.debug { message.as_str() } else { GENERIC_ERROR };
        (StatusCode::INTERNAL_SERVER_ERROR, render_error(shown)).into_response()
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}
