use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::LogConfig;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide logger.
///
/// Filter defaults to `info` and honours `RUST_LOG`.  With a log directory
/// configured, records are appended to `<unix_seconds>.log` inside it and
/// its path is returned; otherwise they go to stderr.  Calling this again
/// after a logger is installed does nothing and returns `Ok(None)`.
pub fn init_logging(cfg: &LogConfig) -> Result<Option<PathBuf>> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(None);
    }

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[ {} ] {} {} - {} - {}",
            buf.timestamp(),
            record.line().unwrap_or(0),
            record.target(),
            record.level(),
            record.args()
        )
    });

    let log_file = match &cfg.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            let path = log_file_path(dir, secs);
            // Runs started within the same second share a file.
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
            Some(path)
        }
        None => None,
    };

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
    Ok(log_file)
}

fn log_file_path(dir: &Path, unix_secs: u64) -> PathBuf {
    dir.join(format!("{unix_secs}.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_once_and_writes_into_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = LogConfig {
            log_dir: Some(dir.path().join("logs")),
        };

        let path = init_logging(&cfg).unwrap().expect("log file path");
        assert!(dir.path().join("logs").is_dir());
        assert!(path.is_file());
        assert_eq!(path.parent(), Some(dir.path().join("logs").as_path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));

        log::info!("first record");
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("INFO - first record"));

        let again = init_logging(&cfg).unwrap();
        assert_eq!(again, None);
        let entries = std::fs::read_dir(dir.path().join("logs")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn log_files_are_named_by_timestamp() {
        let path = log_file_path(Path::new("logs"), 1_700_000_000);
        assert_eq!(path, Path::new("logs/1700000000.log"));
    }
}
