//! Error types for refresh operations

use thiserror::Error;

/// Errors that can occur during refresh operations
#[derive(Error, Debug)]
pub enum WatchError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker error (tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}
