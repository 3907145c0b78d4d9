//! WebServer-specific data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::{LeadId, LeadSubmission, SiteKey};

/// An accepted lead with its receipt metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLead {
    pub lead_id: LeadId,
    pub received_at: DateTime<Utc>,
    pub site: SiteKey,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl StoredLead {
    /// Stamp an accepted submission with receipt metadata
    pub fn from_submission(submission: LeadSubmission) -> Self {
        Self {
            lead_id: LeadId::new(),
            received_at: Utc::now(),
            site: submission.site.unwrap_or_else(SiteKey::unknown),
            name: submission.name,
            email: submission.email,
            message: submission.message,
        }
    }
}

/// Operator-facing stats document
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeadStats {
    pub leads_received: u64,
    pub uptime_seconds: u64,
}
