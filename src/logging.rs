//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so logs go to
//! `<data dir>/headlines/headlines.log`. Logging is off unless
//! `HEADLINES_LOG` holds a filter such as `debug` or `headlines=trace`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HEADLINES_LOG";

/// Default location of the log file.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("headlines").join("headlines.log"))
}

/// Install the global subscriber if `HEADLINES_LOG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init_from_env() -> io::Result<Option<PathBuf>> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    init_with_filter(&filter, &path)?;
    Ok(Some(path))
}

/// Install the global subscriber writing to `path` with `filter`.
///
/// A subscriber that is already installed is left in place.
pub fn init_with_filter(filter: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_is_under_app_dir() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("headlines/headlines.log"));
        }
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("test.log");

        init_with_filter("debug", &path).unwrap();
        tracing::info!("hello from test");

        assert!(path.exists());
    }
}
