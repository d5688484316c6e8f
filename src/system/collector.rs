use std::path::Path;
use std::thread;
use std::time::Duration;

use sysinfo::{Disks, System};

use super::MetricsProvider;
use crate::error::SnapshotError;

/// Observation interval over which the CPU utilization delta is computed.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

pub struct Collector {
    sys: System,
    disks: Disks,
    cpu_sample_window: Duration,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Self::with_sample_window(CPU_SAMPLE_WINDOW)
    }

    /// The window must be at least `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`
    /// for the utilization delta to be meaningful.
    pub fn with_sample_window(cpu_sample_window: Duration) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        Collector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            cpu_sample_window,
        }
    }
}

impl MetricsProvider for Collector {
    fn cpu_percent(&mut self) -> Result<f64, SnapshotError> {
        // First refresh establishes the baseline; utilization is the delta
        // observed over the sample window.
        self.sys.refresh_cpu_all();
        thread::sleep(self.cpu_sample_window);
        self.sys.refresh_cpu_all();

        if self.sys.cpus().is_empty() {
            return Err(SnapshotError::MetricsUnavailable(
                "platform reported no CPUs".to_string(),
            ));
        }
        Ok(f64::from(self.sys.global_cpu_usage()))
    }

    fn memory_used_percent(&mut self) -> Result<f64, SnapshotError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(SnapshotError::MetricsUnavailable(
                "platform reported zero total memory".to_string(),
            ));
        }
        Ok(self.sys.used_memory() as f64 / total as f64 * 100.0)
    }

    fn disk_used_percent(&mut self, mount_point: &Path) -> Result<f64, SnapshotError> {
        self.disks.refresh(true);
        let disk = self
            .disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == mount_point)
            .ok_or_else(|| {
                SnapshotError::MetricsUnavailable(format!(
                    "no filesystem mounted at {}",
                    mount_point.display()
                ))
            })?;

        let total = disk.total_space();
        if total == 0 {
            return Err(SnapshotError::MetricsUnavailable(format!(
                "filesystem at {} reports zero capacity",
                mount_point.display()
            )));
        }
        let used = total.saturating_sub(disk.available_space());
        Ok(used as f64 / total as f64 * 100.0)
    }
}
