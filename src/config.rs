use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the snapshot file is written into. Defaults to the process
    /// working directory.
    pub directory: Option<PathBuf>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("healthsnap").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_writes_to_working_directory() {
        let config = Config::default();
        assert!(config.output.directory.is_none());
    }

    #[test]
    fn parse_output_directory() {
        let toml_str = r#"
[output]
directory = "/var/lib/healthsnap"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.output.directory,
            Some(PathBuf::from("/var/lib/healthsnap"))
        );
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert!(config.output.directory.is_none());
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("healthsnap_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert!(config.output.directory.is_none());
        let _ = std::fs::remove_file(&temp);
    }
}
