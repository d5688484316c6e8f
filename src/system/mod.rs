//! Host metrics access. `MetricsProvider` is the seam between the snapshot
//! pipeline and the operating system; `Collector` is the sysinfo-backed
//! implementation used in production.

use std::path::Path;

use crate::error::SnapshotError;

mod collector;

pub use collector::{CPU_SAMPLE_WINDOW, Collector};

/// Capability interface over the platform metrics facilities. Each query
/// returns a utilization percentage in `[0, 100]` or fails with
/// [`SnapshotError::MetricsUnavailable`].
pub trait MetricsProvider {
    /// Aggregate all-cores CPU utilization, averaged over the provider's
    /// sampling window.
    fn cpu_percent(&mut self) -> Result<f64, SnapshotError>;

    /// Memory currently in use relative to total.
    fn memory_used_percent(&mut self) -> Result<f64, SnapshotError>;

    /// Used capacity of the filesystem mounted at `mount_point`.
    fn disk_used_percent(&mut self, mount_point: &Path) -> Result<f64, SnapshotError>;
}

/// Top-level mount point whose usage the snapshot reports.
pub fn root_mount() -> &'static Path {
    #[cfg(windows)]
    {
        Path::new("C:\\")
    }
    #[cfg(not(windows))]
    {
        Path::new("/")
    }
}
