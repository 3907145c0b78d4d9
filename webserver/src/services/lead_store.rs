//! Lead persistence service
//!
//! Keeps accepted leads in memory and optionally appends each one as a
//! JSON line to a file so leads survive restarts.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::WebServerResult;
use crate::traits::LeadStore;
use crate::types::StoredLead;
use shared::LeadId;

/// Real lead store with in-memory list and optional JSONL persistence
#[derive(Clone)]
pub struct RealLeadStore {
    leads: Arc<RwLock<Vec<StoredLead>>>,
    persist_path: Option<PathBuf>,
}

impl RealLeadStore {
    /// Create an in-memory store
    pub fn new() -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
            persist_path: None,
        }
    }

    /// Create a store that also appends accepted leads to a JSONL file
    pub fn with_persistence(path: impl Into<PathBuf>) -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
            persist_path: Some(path.into()),
        }
    }

    async fn append_line(&self, lead: &StoredLead) -> WebServerResult<()> {
        let Some(path) = &self.persist_path else {
            return Ok(());
        };

        let line = serde_json::to_string(lead)?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;

        Ok(())
    }
}

impl Default for RealLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadStore for RealLeadStore {
    async fn store(&self, lead: StoredLead) -> WebServerResult<LeadId> {
        // File append happens before the in-memory push
        self.append_line(&lead).await?;

        let lead_id = lead.lead_id.clone();
        self.leads.write().await.push(lead);

        debug!(lead_id = %lead_id, "lead stored");
        Ok(lead_id)
    }

    async fn count(&self) -> u64 {
        self.leads.read().await.len() as u64
    }

    async fn recent(&self, limit: usize) -> Vec<StoredLead> {
        let leads = self.leads.read().await;
        leads.iter().rev().take(limit).cloned().collect()
    }
}
