//! Core error types for barakah-core.
//!
//! One thiserror hierarchy: `CoreError` at the top, with per-subsystem
//! error enums folded in via `#[from]`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for barakah-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Document store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Bulk import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Assistant boundary errors
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The data directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),

    /// The document could not be serialized for writing
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The document file could not be written
    #[error("Failed to write document to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Bulk-import errors. Raised before any state is touched; a rejected
/// payload never mutates the document.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The payload is not valid JSON
    #[error("Invalid JSON payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an array
    #[error("Import payload must be a JSON array")]
    NotAnArray,

    /// The requested target collection does not exist
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),
}

/// Configuration-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Assistant-boundary errors. These never escape to the user as errors;
/// the call site maps them to a fallback conversational reply.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// No API key configured
    #[error("Assistant API key not configured")]
    NotConfigured,

    /// HTTP transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("Unexpected response shape: {0}")]
    BadResponse(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
