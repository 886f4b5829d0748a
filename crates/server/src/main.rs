/// Sysdash - Server
///
/// 提供页面、系统性能数据接口与输入校验接口

mod api;
mod app_state;
mod config;
mod errors;
mod logging;
mod metrics;
mod pages;
mod services;

use common::models::constants::DEFAULT_BIND_ADDR;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use crate::{app_state::AppState, metrics::HostSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置
    let cfg = config::Config::from_env()?;

    // 初始化日志，guard 需持有到进程退出
    let _log_guard = logging::init_tracing(&cfg)?;
    info!("🚀 启动 Sysdash Server...");
    info!("✅ 配置加载成功: {:?}", cfg);

    if cfg.debug {
        warn!("调试模式已开启，错误页会展示真实错误信息");
    }

    // 创建应用状态
    let app_state = AppState::new(cfg, Arc::new(HostSource));

    // 构建应用路由
    let app = api::app_router(app_state);

    // 启动服务器
    let addr = SocketAddr::from(DEFAULT_BIND_ADDR);
    info!("🎯 服务器监听在 http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 服务器已停止");
    Ok(())
}

/// 等待停机信号（Ctrl+C, SIGTERM）
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("收到 Ctrl+C 信号，开始停机"),
        _ = terminate => info!("收到 SIGTERM 信号，开始停机"),
    }
}
