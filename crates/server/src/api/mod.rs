pub mod input;
pub mod performance;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{app_state::AppState, pages};

/// 构建完整的应用路由（统一入口）
pub fn app_router(state: AppState) -> Router {
    let debug = state.config().debug;
    with_layers(routes(), debug).with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new()
        // 页面
        .route("/", get(pages::index))
        .route("/performance", get(pages::performance))
        .route("/health", get(pages::health))
        // JSON 接口
        .route("/performance-data", get(performance::performance_data))
        .route("/api", post(input::submit_input))
        .fallback(pages::not_found)
}

fn with_layers(router: Router<AppState>, debug: bool) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(pages::PanicPage::new(debug)))
        .layer(TraceLayer::new_for_http())
}
