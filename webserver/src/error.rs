//! WebServer-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {message}")]
    ServerStartup { message: String },

    #[error("Lead store error: {message}")]
    StoreError { message: String },

    #[error("Notification error: {message}")]
    NotifyError { message: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type WebServerResult<T> = Result<T, WebServerError>;
