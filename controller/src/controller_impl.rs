//! Lead form controller
//!
//! Holds the draft and submission status, and drives submission attempts
//! against an injected endpoint. Exactly one writer mutates this state (the
//! user session), so the locks here only arbitrate interleaving between an
//! in-flight submit and further user events, never parallel writers.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use shared::{LeadSubmission, SiteKey};

use crate::traits::{StatusDecorator, SubmissionEndpoint};
use crate::types::{FieldName, LeadDraft, ResubmitPolicy, SubmissionStatus};

/// Static user-facing copy; deliberately non-diagnostic
const SUCCESS_LINE: &str = "Thank you! We'll get back to you soon.";
const ERROR_LINE: &str = "Oops! Something went wrong. Please try again.";

/// Client-side lead form controller with an injected submission endpoint
pub struct FormController<E: SubmissionEndpoint> {
    site: SiteKey,
    endpoint: E,
    policy: ResubmitPolicy,
    draft: Arc<RwLock<LeadDraft>>,
    status: Arc<RwLock<SubmissionStatus>>,
}

impl<E: SubmissionEndpoint> FormController<E> {
    /// Create a controller with the default resubmit policy
    pub fn new(site: SiteKey, endpoint: E) -> Self {
        Self::with_policy(site, endpoint, ResubmitPolicy::default())
    }

    pub fn with_policy(site: SiteKey, endpoint: E, policy: ResubmitPolicy) -> Self {
        Self {
            site,
            endpoint,
            policy,
            draft: Arc::new(RwLock::new(LeadDraft::default())),
            status: Arc::new(RwLock::new(SubmissionStatus::Idle)),
        }
    }

    /// Replace a single draft field; never touches status
    pub async fn update_field(&self, field: FieldName, value: impl Into<String>) {
        self.draft.write().await.set(field, value);
    }

    /// Snapshot of the current draft
    pub async fn draft(&self) -> LeadDraft {
        self.draft.read().await.clone()
    }

    /// Current submission status
    pub async fn status(&self) -> SubmissionStatus {
        *self.status.read().await
    }

    pub fn site(&self) -> &SiteKey {
        &self.site
    }

    /// Drive one submission attempt and return the resulting status.
    ///
    /// Guarantees at most one endpoint call per invocation: exactly one
    /// under `AllowConcurrent`, and zero when `BlockWhilePending` drops an
    /// attempt that arrives while another is in flight. All failure causes
    /// (rejection, network loss, timeout, malformed response) collapse into
    /// `Error`; nothing propagates to the caller. The draft is cleared only
    /// on confirmed acceptance.
    pub async fn submit(&self) -> SubmissionStatus {
        {
            // Pending check and transition under one write lock, so a
            // concurrent submit cannot slip between them
            let mut status = self.status.write().await;
            if *status == SubmissionStatus::Pending
                && self.policy == ResubmitPolicy::BlockWhilePending
            {
                debug!("submit dropped: attempt already in flight");
                return SubmissionStatus::Pending;
            }
            *status = SubmissionStatus::Pending;
        }

        let payload = {
            let draft = self.draft.read().await;
            LeadSubmission {
                site: Some(self.site.clone()),
                name: draft.name.clone(),
                email: draft.email.clone(),
                message: draft.message.clone(),
            }
        };

        match self.endpoint.submit(payload).await {
            Ok(receipt) => {
                self.draft.write().await.clear();
                *self.status.write().await = SubmissionStatus::Success;
                debug!(lead_id = %receipt.lead_id, "lead accepted");
                SubmissionStatus::Success
            }
            Err(failure) => {
                // Draft is kept so the user does not retype
                *self.status.write().await = SubmissionStatus::Error;
                debug!(%failure, "lead submission failed");
                SubmissionStatus::Error
            }
        }
    }

    /// User-visible status line for the current status, if any
    pub async fn status_line(&self, decorator: &dyn StatusDecorator) -> Option<String> {
        status_line(self.status().await, decorator)
    }
}

/// Render the static inline message for a status; None for idle/pending
pub fn status_line(status: SubmissionStatus, decorator: &dyn StatusDecorator) -> Option<String> {
    match status {
        SubmissionStatus::Success => Some(decorator.decorate(SUCCESS_LINE)),
        SubmissionStatus::Error => Some(decorator.decorate(ERROR_LINE)),
        SubmissionStatus::Idle | SubmissionStatus::Pending => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::IdentityDecorator;

    #[test]
    fn test_status_line_copy() {
        let decorator = IdentityDecorator;

        assert_eq!(
            status_line(SubmissionStatus::Success, &decorator).unwrap(),
            "Thank you! We'll get back to you soon."
        );
        assert_eq!(
            status_line(SubmissionStatus::Error, &decorator).unwrap(),
            "Oops! Something went wrong. Please try again."
        );
        assert_eq!(status_line(SubmissionStatus::Idle, &decorator), None);
        assert_eq!(status_line(SubmissionStatus::Pending, &decorator), None);
    }
}
