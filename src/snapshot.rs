use std::path::Path;

use serde::Serialize;

use crate::error::SnapshotError;
use crate::system::MetricsProvider;

/// One host utilization sample. Declaration order is the serialized key
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub cpu_usage_percent: f64,
    pub ram_usage_percent: f64,
    pub disk_usage_percent: f64,
}

impl HealthSnapshot {
    /// Packs raw percentages into a snapshot, rounding each to two decimals.
    pub fn from_raw(cpu: f64, ram: f64, disk: f64) -> Self {
        HealthSnapshot {
            cpu_usage_percent: round2(cpu),
            ram_usage_percent: round2(ram),
            disk_usage_percent: round2(disk),
        }
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Samples CPU, memory, and disk in that order. The first failing query
/// aborts the remaining ones.
pub fn capture(
    provider: &mut dyn MetricsProvider,
    root_mount: &Path,
) -> Result<HealthSnapshot, SnapshotError> {
    let cpu = provider.cpu_percent()?;
    let ram = provider.memory_used_percent()?;
    let disk = provider.disk_used_percent(root_mount)?;
    Ok(HealthSnapshot::from_raw(cpu, ram, disk))
}
