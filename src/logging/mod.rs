mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::utils::app_home;

/// Log filename used by the board.
pub const LOG_FILENAME: &str = "lostfound.log";

/// Target used in the default filter when `RUST_LOG` is unset.
pub const LOG_TARGET: &str = "campus_lostfound";

/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl LogConfig {
    /// Path of the current log file (before any rotation suffix).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }

    fn default_directive(&self) -> String {
        format!("{LOG_TARGET}={}", self.log_level)
    }
}

/// `logs/` under the app home.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    app_home()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
