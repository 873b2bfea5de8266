//! Common error types for Coursedeck

use thiserror::Error;

/// Common result type for Coursedeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Coursedeck services
#[derive(Error, Debug)]
pub enum Error {
    /// Remote document store error (network, status, or payload)
    #[error("Store error: {0}")]
    Store(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
