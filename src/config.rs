use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "STUD_INGEST_CONFIG";

// ---------------------------------------------------------------------------
// Ingestion settings
// ---------------------------------------------------------------------------

/// Where the ingestion step reads from and writes to, and how it splits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataIngestionConfig {
    /// Source dataset.
    pub source_path: PathBuf,
    /// Unmodified copy of the source.
    pub raw_data_path: PathBuf,
    pub train_data_path: PathBuf,
    pub test_data_path: PathBuf,
    /// Fraction of rows placed in the test set.
    pub test_size: f64,
    /// Seed for the split permutation.
    pub random_state: u64,
}

impl Default for DataIngestionConfig {
    fn default() -> Self {
        let artifacts = Path::new("artifacts");
        Self {
            source_path: Path::new("notebook").join("data").join("stud.csv"),
            raw_data_path: artifacts.join("data.csv"),
            train_data_path: artifacts.join("train.csv"),
            test_data_path: artifacts.join("test.csv"),
            test_size: 0.2,
            random_state: 42,
        }
    }
}

// ---------------------------------------------------------------------------
// Logging settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory receiving one log file per run.  `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: Some(PathBuf::from("logs")),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig – everything the binary needs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ingestion: DataIngestionConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    /// Parse a JSON configuration file.  Keys left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from the file named by [`CONFIG_ENV`], or fall back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_point_at_artifacts() {
        let cfg = DataIngestionConfig::default();
        assert_eq!(cfg.source_path, Path::new("notebook/data/stud.csv"));
        assert_eq!(cfg.raw_data_path, Path::new("artifacts/data.csv"));
        assert_eq!(cfg.train_data_path, Path::new("artifacts/train.csv"));
        assert_eq!(cfg.test_data_path, Path::new("artifacts/test.csv"));
        assert_eq!(cfg.test_size, 0.2);
        assert_eq!(cfg.random_state, 42);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "ingestion": { "source_path": "input/scores.csv" }, "logging": { "log_dir": null } }"#,
        )
        .unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.ingestion.source_path, Path::new("input/scores.csv"));
        assert_eq!(cfg.ingestion.train_data_path, Path::new("artifacts/train.csv"));
        assert_eq!(cfg.ingestion.random_state, 42);
        assert_eq!(cfg.logging.log_dir, None);
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(AppConfig::from_file(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn written_config_reads_back_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut cfg = AppConfig::default();
        cfg.ingestion.test_size = 0.25;
        cfg.ingestion.random_state = 7;
        cfg.logging.log_dir = None;
        std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

        assert_eq!(AppConfig::from_file(&path).unwrap(), cfg);
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("config.json"));
    }
}
