//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "miniapp=info,warn";
const LOG_FILE_NAME: &str = "miniapp.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (daily rotated files land here)
    pub log_dir: PathBuf,
    /// Base file name; the appender adds the date suffix
    pub file_name: String,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Mirror logs to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: LOG_FILE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    ///
    /// - `MINIAPP_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter directive (default `miniapp=info,warn`)
    /// - `MINIAPP_LOG_STDERR`: `0` turns the stderr layer off
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lib_utils::get_env_opt("MINIAPP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_name: defaults.file_name,
            log_level: lib_utils::get_env_opt("RUST_LOG").unwrap_or(defaults.log_level),
            stderr: lib_utils::get_env_opt("MINIAPP_LOG_STDERR")
                .map(|v| v != "0")
                .unwrap_or(defaults.stderr),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
