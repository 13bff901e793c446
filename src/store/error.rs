use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Record file not found: {0}")]
    NotFound(String),

    #[error("Unreadable record {record}: {reason}")]
    Unreadable { record: String, reason: String },

    #[error("Markdown store error: {0}")]
    Markdown(String),

    #[error("Record id space exhausted")]
    IdsExhausted,

    #[error("{0}")]
    Custom(String),
}

impl StoreError {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        StoreError::Custom(msg.into())
    }

    pub fn unreadable(record: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Unreadable {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

impl From<mdstore::StoreError> for StoreError {
    fn from(err: mdstore::StoreError) -> Self {
        match err {
            mdstore::StoreError::IoError(e) => StoreError::IoError(e),
            mdstore::StoreError::JsonError(e) => StoreError::JsonError(e),
            mdstore::StoreError::NotFound(id) => StoreError::NotFound(id),
            mdstore::StoreError::FrontmatterError(msg) | mdstore::StoreError::YamlError(msg) => {
                StoreError::Unreadable {
                    record: String::new(),
                    reason: msg,
                }
            }
            other => StoreError::Markdown(other.to_string()),
        }
    }
}
