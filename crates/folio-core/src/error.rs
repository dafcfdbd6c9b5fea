//! Error types for external capabilities.
//!
//! None of these reach the dispatcher: commands convert them to degraded
//! output and the session controller logs and drops them.

use thiserror::Error;

/// localStorage access failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
}

/// Clipboard access failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("nothing selected")]
    EmptySelection,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Failures from network-backed services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("service not configured")]
    NotConfigured,
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
