//! Error types for the CLI.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the CLI user.
#[derive(Error, Debug)]
pub enum CliError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed symbol input file
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Named symbol not present in the input file
    #[error("Symbol not found: {0}")]
    NotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(#[from] emblem_store::StoreError),

    /// Refresh service error
    #[error("Refresh error: {0}")]
    Watch(#[from] emblem_watch::WatchError),
}
