/// 操作系统指标来源
///
/// CPU、内存使用 sysinfo 查询；Unix 下磁盘使用 statvfs，与 `df` 口径一致

use common::{utils::usage_percent, Error, Result};
use std::path::Path;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

/// 系统指标来源
pub trait SystemSource: Send + Sync {
    /// 在采样窗口内测量 CPU 使用率（会阻塞当前线程）
    fn cpu_usage(&self, window: Duration) -> Result<f64>;

    /// 内存使用率
    fn memory_usage(&self) -> Result<f64>;

    /// 指定路径所在文件系统的磁盘使用率
    fn disk_usage(&self, path: &Path) -> Result<f64>;
}

/// 查询本机的指标来源
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSource;

impl SystemSource for HostSource {
    fn cpu_usage(&self, window: Duration) -> Result<f64> {
        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::new().with_cpu_usage()),
        );
        if sys.cpus().is_empty() {
            return Err(Error::Metrics("no CPU information available".to_string()));
        }

        // sysinfo 需要两次刷新之间至少间隔 MINIMUM_CPU_UPDATE_INTERVAL
        let window = window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();
        std::thread::sleep(window);
        sys.refresh_cpu_usage();

        let usage = f64::from(sys.global_cpu_usage());
        debug!("CPU usage over {:?}: {:.2}", window, usage);
        Ok(usage)
    }

    fn memory_usage(&self) -> Result<f64> {
        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
        );
        sys.refresh_memory();

        usage_percent(sys.total_memory(), sys.available_memory())
            .ok_or_else(|| Error::Metrics("total memory reported as zero".to_string()))
    }

    #[cfg(unix)]
    fn disk_usage(&self, path: &Path) -> Result<f64> {
        use common::utils::disk_used_percent;
        use nix::sys::statvfs::statvfs;

        let stat = statvfs(path)
            .map_err(|e| Error::Metrics(format!("statvfs({}) failed: {}", path.display(), e)))?;

        disk_used_percent(
            u64::from(stat.blocks()),
            u64::from(stat.blocks_free()),
            u64::from(stat.blocks_available()),
        )
        .ok_or_else(|| {
            Error::Metrics(format!("filesystem at {} reports zero capacity", path.display()))
        })
    }

    #[cfg(not(unix))]
    fn disk_usage(&self, path: &Path) -> Result<f64> {
        let disks = sysinfo::Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .ok_or_else(|| {
                Error::Metrics(format!("no filesystem mounted at {}", path.display()))
            })?;

        usage_percent(disk.total_space(), disk.available_space()).ok_or_else(|| {
            Error::Metrics(format!("filesystem at {} reports zero capacity", path.display()))
        })
    }
}
