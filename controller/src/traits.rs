//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;

use shared::{LeadAccepted, LeadSubmission, SubmitFailure};

/// Lead submission endpoint contract
///
/// One call is one request/response exchange; the caller is responsible
/// for never issuing more than one call per user-level submit.
#[mockall::automock]
#[async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    /// Deliver one lead payload and return the accept/reject signal
    async fn submit(&self, lead: LeadSubmission) -> Result<LeadAccepted, SubmitFailure>;
}

/// Optional output decoration capability
///
/// Defaults to the identity decorator; an enhancement may be supplied at
/// startup and is used transparently when available. No controller
/// behavior depends on which decorator is active.
pub trait StatusDecorator: Send + Sync {
    /// Decorate one user-facing line
    fn decorate(&self, line: &str) -> String;

    /// Capability name, for startup logging
    fn name(&self) -> &'static str;
}
