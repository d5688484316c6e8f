//! One-shot host health snapshot: sample CPU, memory, and root-filesystem
//! utilization once and write the result as a timestamped JSON file.

pub mod config;
pub mod error;
pub mod snapshot;
pub mod system;
pub mod writer;

pub use error::SnapshotError;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::snapshot::capture;
use crate::system::MetricsProvider;
use crate::writer::write_snapshot;

/// Samples host metrics once and writes the snapshot into `output_dir`,
/// returning the path of the written file. The first failing stage aborts
/// the run; no partial output is ever produced.
pub fn run(
    provider: &mut dyn MetricsProvider,
    root_mount: &Path,
    output_dir: &Path,
    taken_at: DateTime<Local>,
) -> Result<PathBuf, SnapshotError> {
    let snapshot = capture(provider, root_mount)?;
    write_snapshot(&snapshot, output_dir, taken_at)
}
