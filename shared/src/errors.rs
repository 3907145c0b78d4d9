//! Shared error types for the lead capture system

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Failure taxonomy at the submission boundary
///
/// Every variant collapses into the same user-visible error state; the
/// distinction exists for logging and tests, never for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitFailure {
    #[error("network error: {0}")]
    NetworkError(String),

    #[error("request timed out")]
    Timeout,

    #[error("endpoint rejected the payload: HTTP {status}")]
    Rejected { status: u16 },

    #[error("malformed endpoint response: {0}")]
    MalformedResponse(String),
}

impl SubmitFailure {
    /// Whether the endpoint itself answered, as opposed to transport loss
    pub fn is_rejection(&self) -> bool {
        matches!(self, SubmitFailure::Rejected { .. })
    }
}
