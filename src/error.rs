//! Error types for the remote_fs_client crate.

use thiserror::Error;

/// Errors that can occur when talking to the file storage API.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Local file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for StorageError.
pub type Result<T> = std::result::Result<T, StorageError>;
