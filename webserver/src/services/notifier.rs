//! New-lead notification service
//!
//! The operator notification hook. This deployment emits one structured
//! tracing event per accepted lead; an email or SMS transport slots in
//! behind the same trait.

use async_trait::async_trait;
use tracing::info;

use crate::error::WebServerResult;
use crate::traits::LeadNotifier;
use crate::types::StoredLead;

/// Real lead notifier backed by structured logging
#[derive(Clone, Copy, Debug, Default)]
pub struct RealLeadNotifier;

impl RealLeadNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeadNotifier for RealLeadNotifier {
    async fn notify(&self, lead: &StoredLead) -> WebServerResult<()> {
        info!(
            lead_id = %lead.lead_id,
            site = %lead.site,
            name = %lead.name,
            email = %lead.email,
            "📬 New lead received"
        );
        Ok(())
    }
}
