/// 指标收集器
///
/// 组合各项指标生成 MetricsReport

use common::models::constants::ROOT_MOUNT_POINT;
use common::{MetricsReport, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::SystemSource;

#[derive(Clone)]
pub struct MetricsCollector {
    source: Arc<dyn SystemSource>,
    cpu_window: Duration,
}

impl MetricsCollector {
    pub fn new(source: Arc<dyn SystemSource>, cpu_window: Duration) -> Self {
        Self { source, cpu_window }
    }

    /// 采集一次指标，CPU 采样期间阻塞调用线程
    pub fn sample(&self) -> Result<MetricsReport> {
        let cpu = self.source.cpu_usage(self.cpu_window)?;
        let memory = self.source.memory_usage()?;
        let disk = self.source.disk_usage(Path::new(ROOT_MOUNT_POINT))?;

        Ok(MetricsReport::from_percentages(cpu, memory, disk))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use common::Error;
    use std::sync::Mutex;

    /// 返回固定值的指标来源
    pub(crate) struct FixedSource {
        pub cpu: f64,
        pub memory: f64,
        pub disk: f64,
        pub seen_window: Mutex<Option<Duration>>,
        pub seen_mount: Mutex<Option<String>>,
    }

    impl FixedSource {
        pub(crate) fn new(cpu: f64, memory: f64, disk: f64) -> Self {
            Self {
                cpu,
                memory,
                disk,
                seen_window: Mutex::new(None),
                seen_mount: Mutex::new(None),
            }
        }
    }

    impl SystemSource for FixedSource {
        fn cpu_usage(&self, window: Duration) -> Result<f64> {
            *self.seen_window.lock().unwrap() = Some(window);
            Ok(self.cpu)
        }

        fn memory_usage(&self) -> Result<f64> {
            Ok(self.memory)
        }

        fn disk_usage(&self, mount_point: &Path) -> Result<f64> {
            *self.seen_mount.lock().unwrap() = Some(mount_point.display().to_string());
            Ok(self.disk)
        }
    }

    /// 总是失败的指标来源
    pub(crate) struct FailingSource(pub &'static str);

    impl SystemSource for FailingSource {
        fn cpu_usage(&self, _window: Duration) -> Result<f64> {
            Err(Error::Metrics(self.0.to_string()))
        }

        fn memory_usage(&self) -> Result<f64> {
            Err(Error::Metrics(self.0.to_string()))
        }

        fn disk_usage(&self, _mount_point: &Path) -> Result<f64> {
            Err(Error::Metrics(self.0.to_string()))
        }
    }

    #[test]
    fn test_sample_formats_values() {
        let source = Arc::new(FixedSource::new(50.0, 33.333, 7.5));
        let collector = MetricsCollector::new(source.clone(), Duration::from_secs(2));

        let report = collector.sample().unwrap();
        assert_eq!(report.cpu_usage, "50.00%");
        assert_eq!(report.memory_usage, "33.33%");
        assert_eq!(report.disk_usage, "7.50%");

        assert_eq!(*source.seen_window.lock().unwrap(), Some(Duration::from_secs(2)));
        assert_eq!(source.seen_mount.lock().unwrap().as_deref(), Some("/"));
    }

    #[test]
    fn test_sample_propagates_source_error() {
        let collector = MetricsCollector::new(Arc::new(FailingSource("Test Error")), Duration::ZERO);
        let err = collector.sample().unwrap_err();
        assert_eq!(err.to_string(), "Test Error");
    }
}
