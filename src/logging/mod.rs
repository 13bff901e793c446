//! Tracing setup: human or JSON output to stdout and a rolling log file.
mod init;
pub use init::{init_logging, parse_rotation};
use crate::utils::get_syllabus_home;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "syllabus-daemon.log";

/// Log target whose level the default filter controls.
const LOG_TARGET: &str = "syllabus_daemon";

static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();

/// Record where the log file lives so error responses can point at it.
/// Only the first call has an effect.
pub fn set_log_file_path(path: String) {
    if LOG_FILE_PATH.set(path).is_err() {
        tracing::debug!("Log file path already set");
    }
}

/// The log file path recorded at startup, or `""` before it is set.
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}

/// `~/.syllabus/logs`.
pub fn default_log_dir() -> PathBuf {
    get_syllabus_home().join("logs")
}

pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
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
