/// 日志初始化
///
/// 始终输出到终端；配置了 `APP_LOG_FILE` 时同时写入文件

use std::path::Path;

use tracing::Subscriber;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::Config;

/// 初始化全局日志，RUST_LOG 优先于 APP_LOG_LEVEL
///
/// 返回的 guard 需要持有到进程退出，否则文件日志可能丢失
pub fn init_tracing(cfg: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    let (file_layer, guard) = match cfg.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(&path)?);
            (Some(fmt_layer(cfg.json_logs(), writer, false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(cfg.json_logs(), std::io::stdout, true))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

/// 打开日志文件（不轮转），父目录不存在时自动创建
pub fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;
    Ok(appender)
}

fn fmt_layer<S, W>(json: bool, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(ansi)
        .with_writer(writer);

    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;

    #[test]
    fn test_file_appender_writes_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");

        let appender = file_appender(&path).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(appender)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            info!("written to the log file");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("written to the log file"));
    }

    #[test]
    fn test_file_appender_rejects_directory_path() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
