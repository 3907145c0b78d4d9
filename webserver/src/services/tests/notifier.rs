//! Tests for the LeadNotifier service

use crate::services::notifier::RealLeadNotifier;
use crate::traits::LeadNotifier;
use crate::types::StoredLead;
use shared::LeadSubmission;

#[tokio::test]
async fn test_notify_never_fails_for_a_stored_lead() {
    let notifier = RealLeadNotifier::new();

    let lead = StoredLead::from_submission(LeadSubmission {
        site: None,
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        message: "Help".to_string(),
    });

    assert!(notifier.notify(&lead).await.is_ok());
}
