use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::SnapshotError;
use crate::snapshot::HealthSnapshot;

/// Builds the output file name for a snapshot taken at `taken_at`.
pub fn snapshot_filename(taken_at: DateTime<Local>) -> String {
    format!("health_{}.json", taken_at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Serializes the snapshot as indented JSON and writes it into `output_dir`,
/// returning the path of the written file.
pub fn write_snapshot(
    snapshot: &HealthSnapshot,
    output_dir: &Path,
    taken_at: DateTime<Local>,
) -> Result<PathBuf, SnapshotError> {
    let json = serde_json::to_vec_pretty(snapshot)?;
    let path = output_dir.join(snapshot_filename(taken_at));
    fs::write(&path, json).map_err(|source| SnapshotError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn filename_matches_timestamp_pattern() {
        assert_eq!(
            snapshot_filename(fixed_time()),
            "health_2024-03-09_14-05-07.json"
        );
    }

    #[test]
    fn writes_two_space_indented_json() {
        let dir = std::env::temp_dir().join("healthsnap_writer_test");
        fs::create_dir_all(&dir).unwrap();

        let snapshot = HealthSnapshot::from_raw(23.456, 67.891, 45.0);
        let path = write_snapshot(&snapshot, &dir, fixed_time()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("{\n  \"cpu_usage_percent\": 23.46"));

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let snapshot = HealthSnapshot::from_raw(1.0, 2.0, 3.0);
        let missing = Path::new("/nonexistent/healthsnap");
        let err = write_snapshot(&snapshot, missing, fixed_time()).unwrap_err();
        assert!(matches!(err, SnapshotError::Write { .. }));
    }
}
