use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the snapshot pipeline. Any failure aborts the run
/// before the output file is created.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("metrics unavailable: {0}")]
    MetricsUnavailable(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
