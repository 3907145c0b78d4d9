//! Controller error types

use thiserror::Error;

/// Result type for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Controller error types
///
/// Submission failures never surface here; they are absorbed into the
/// submission status at the boundary. These errors cover setup only.
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Endpoint client error: {message}")]
    EndpointError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
