use std::path::PathBuf;

/// Name of the per-user folder holding config, data and logs.
pub const SYLLABUS_FOLDER: &str = ".syllabus";

/// `~/.syllabus`, falling back to `./.syllabus` when no home directory is known.
#[must_use]
pub fn get_syllabus_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SYLLABUS_FOLDER)
}

/// Default directory for the Markdown stores.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    get_syllabus_home().join("data")
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}
