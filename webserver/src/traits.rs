//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;

use crate::error::WebServerResult;
use crate::types::StoredLead;
use shared::LeadId;

/// Lead persistence service trait
#[mockall::automock]
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Persist an accepted lead
    async fn store(&self, lead: StoredLead) -> WebServerResult<LeadId>;

    /// Number of leads accepted since startup
    async fn count(&self) -> u64;

    /// Most recent accepted leads, newest first
    async fn recent(&self, limit: usize) -> Vec<StoredLead>;
}

/// New-lead notification service trait
#[mockall::automock]
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    /// Notify the operator about an accepted lead
    async fn notify(&self, lead: &StoredLead) -> WebServerResult<()>;
}
