//! Tests for the LeadStore service

use crate::services::lead_store::RealLeadStore;
use crate::traits::LeadStore;
use crate::types::StoredLead;
use shared::{LeadSubmission, SiteKey};

fn sample_lead(name: &str) -> StoredLead {
    StoredLead::from_submission(LeadSubmission {
        site: Some(SiteKey::new("welshmolecatcher-classic")),
        name: name.to_string(),
        email: "jane@x.com".to_string(),
        message: "Help".to_string(),
    })
}

#[tokio::test]
async fn test_store_starts_empty() {
    let store = RealLeadStore::new();
    assert_eq!(store.count().await, 0);
    assert!(store.recent(10).await.is_empty());
}

#[tokio::test]
async fn test_store_counts_and_returns_ids() {
    let store = RealLeadStore::new();

    let lead = sample_lead("Jane");
    let expected_id = lead.lead_id.clone();
    let stored_id = store.store(lead).await.unwrap();

    assert_eq!(stored_id, expected_id);
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_recent_returns_newest_first() {
    let store = RealLeadStore::new();

    store.store(sample_lead("first")).await.unwrap();
    store.store(sample_lead("second")).await.unwrap();
    store.store(sample_lead("third")).await.unwrap();

    let recent = store.recent(2).await;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].name, "third");
    assert_eq!(recent[1].name, "second");
}

#[tokio::test]
async fn test_persistence_appends_one_json_line_per_lead() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.jsonl");

    let store = RealLeadStore::with_persistence(&path);
    store.store(sample_lead("Jane")).await.unwrap();
    store.store(sample_lead("Gwyn")).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: StoredLead = serde_json::from_str(lines[0]).unwrap();
    let second: StoredLead = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(first.name, "Jane");
    assert_eq!(second.name, "Gwyn");
}
