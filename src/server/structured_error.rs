use std::fmt::Display;

use serde::Serialize;

use crate::logging::get_log_file_path;
use crate::server::error_mapping::ToStructuredError;

const FALLBACK_JSON: &str =
    r#"{"code":"INTERNAL_ERROR","message":"error could not be serialized","clientError":false,"store":"","logFile":""}"#;

/// Error payload carried in the `error` field of a failed response.
///
/// `client_error` tells a caller whether fixing the request can help (a
/// missing id, position 0) or whether the store failed underneath it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub client_error: bool,
    /// Data directory of the catalog, or `memory`.
    pub store: String,
    pub log_file: String,
}

impl StructuredError {
    pub fn describe<E: ToStructuredError + Display>(store: &str, err: &E) -> Self {
        let (code, tip) = err.error_code_and_tip();
        Self {
            code: code.to_string(),
            message: err.to_string(),
            tip: tip.map(str::to_string),
            client_error: err.is_client_error(),
            store: store.to_string(),
            log_file: get_log_file_path().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK_JSON.to_string())
    }
}

/// Render an error as the JSON string placed in a response's `error` field.
pub fn to_error_json<E: ToStructuredError + Display>(store: &str, err: &E) -> String {
    StructuredError::describe(store, err).to_json()
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod structured_error_tests;
