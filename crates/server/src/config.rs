/// 配置管理

use common::models::constants::DEFAULT_CPU_SAMPLE_SECS;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// 环境变量前缀，例如 `APP_SECRET_KEY`
const ENV_PREFIX: &str = "APP";

/// 密钥最小长度
const MIN_SECRET_LEN: usize = 16;

#[derive(Clone, Deserialize)]
pub struct Config {
    /// 必须由外部提供，没有内置默认值
    pub secret_key: String,
    pub debug: bool,
    pub log_level: String,
    /// text | json
    pub log_format: String,
    /// 可选的日志文件路径，为空时只输出到终端
    #[serde(default)]
    pub log_file: Option<String>,
    pub cpu_sample_secs: u64,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: config::Environment) -> anyhow::Result<Self> {
        let cfg: Config = config::Config::builder()
            .set_default("debug", false)?
            .set_default("log_level", "info")?
            .set_default("log_format", "text")?
            .set_default("cpu_sample_secs", DEFAULT_CPU_SAMPLE_SECS)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
            .map_err(|e| common::Error::Config(e.to_string()))?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> common::Result<()> {
        if self.secret_key.trim().len() < MIN_SECRET_LEN {
            return Err(common::Error::Config(format!(
                "{}_SECRET_KEY must be at least {} characters",
                ENV_PREFIX, MIN_SECRET_LEN
            )));
        }
        Ok(())
    }

    /// CPU 采样窗口
    pub fn cpu_sample_window(&self) -> Duration {
        Duration::from_secs(self.cpu_sample_secs)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

// 避免密钥出现在日志中
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"<redacted>")
            .field("debug", &self.debug)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("log_file", &self.log_file)
            .field("cpu_sample_secs", &self.cpu_sample_secs)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn test_config(debug: bool) -> Config {
    Config {
        secret_key: "test-secret-key-0123456789".to_string(),
        debug,
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        log_file: None,
        cpu_sample_secs: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_source(env(&[("APP_SECRET_KEY", "a-very-long-secret-value")])).unwrap();
        assert!(!cfg.debug);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.json_logs());
        assert_eq!(cfg.log_file(), None);
        assert_eq!(cfg.cpu_sample_window(), Duration::from_secs(2));
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        assert!(Config::from_source(env(&[])).is_err());
        assert!(Config::from_source(env(&[("APP_DEBUG", "true")])).is_err());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let err = Config::from_source(env(&[("APP_SECRET_KEY", "short")])).unwrap_err();
        assert!(err.to_string().contains("APP_SECRET_KEY"));
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_source(env(&[
            ("APP_SECRET_KEY", "a-very-long-secret-value"),
            ("APP_DEBUG", "TRUE"),
            ("APP_LOG_LEVEL", "warn"),
            ("APP_LOG_FORMAT", "json"),
            ("APP_LOG_FILE", "logs/app.log"),
            ("APP_CPU_SAMPLE_SECS", "1"),
        ]))
        .unwrap();

        assert_eq!(cfg.log_file(), Some(PathBuf::from("logs/app.log")));
        assert!(cfg.debug);
        assert_eq!(cfg.log_level, "warn");
        assert!(cfg.json_logs());
        assert_eq!(cfg.cpu_sample_window(), Duration::from_secs(1));
    }

    #[test]
    fn test_blank_log_file_is_ignored() {
        let cfg = Config::from_source(env(&[
            ("APP_SECRET_KEY", "a-very-long-secret-value"),
            ("APP_LOG_FILE", "  "),
        ]))
        .unwrap();
        assert_eq!(cfg.log_file(), None);
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let cfg = test_config(false);
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains(&cfg.secret_key));
        assert!(printed.contains("<redacted>"));
    }
}
