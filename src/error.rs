//! Error types for focal.

use thiserror::Error;

/// Errors that can occur in focal.
#[derive(Debug, Error)]
pub enum FocalError {
    /// Session storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be loaded, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FocalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
