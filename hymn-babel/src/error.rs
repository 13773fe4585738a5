//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The format does not support the requested operation (e.g. file export)
    #[error("{0}")]
    Unsupported(String),
    /// A caller-supplied argument was rejected (e.g. a file extension)
    #[error("{0}")]
    InvalidArgument(String),
    /// Error while reading the hymn database
    #[error("Parse error: {0}")]
    Parse(String),
    /// Error while producing an export document
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Failure reading or writing a file, passed through unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}
