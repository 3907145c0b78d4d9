//! Controller ↔ Endpoint wire contract
//!
//! One JSON request body and its accept/reject response bodies. The site
//! identifier is an optional static field; everything else is required and
//! validated server-side with the same rules the input surface enforces.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{LeadId, SiteKey};

/// Lead payload posted to the submission endpoint
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq, Eq)]
pub struct LeadSubmission {
    /// Originating presentation variant, omitted by legacy clients
    #[serde(default)]
    pub site: Option<SiteKey>,

    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Acceptance body returned with a 2xx status
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeadAccepted {
    pub lead_id: LeadId,
}

/// Rejection body returned with a non-2xx status; deliberately generic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeadRejected {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_submission() -> LeadSubmission {
        LeadSubmission {
            site: Some(SiteKey::new("welshmolecatcher-classic")),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Help".to_string(),
        }
    }

    #[test]
    fn test_complete_submission_is_valid() {
        assert!(complete_submission().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_are_invalid() {
        let mut submission = complete_submission();
        submission.name = String::new();
        assert!(submission.validate().is_err());

        let mut submission = complete_submission();
        submission.message = String::new();
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_malformed_email_is_invalid() {
        let mut submission = complete_submission();
        submission.email = "not-an-email".to_string();
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_site_field_is_optional_on_the_wire() {
        let json = r#"{"name":"Jane","email":"jane@x.com","message":"Help"}"#;
        let submission: LeadSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.site, None);
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_submission_round_trips_through_json() {
        let submission = complete_submission();
        let json = serde_json::to_string(&submission).unwrap();
        let parsed: LeadSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(submission, parsed);
    }
}
