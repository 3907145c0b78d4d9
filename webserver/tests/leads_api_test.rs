//! Integration tests for the lead API
//!
//! Boots the real router on an ephemeral port and drives it over HTTP,
//! the way the landing pages do.

use std::net::SocketAddr;

use webserver::{
    LeadStats, WebServer,
    services::{RealLeadNotifier, RealLeadStore},
};
use shared::{LeadAccepted, LeadRejected};

async fn spawn_server() -> String {
    let bind: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = WebServer::new(bind, RealLeadStore::new(), RealLeadNotifier::new());
    let router = server.build_router();

    let listener = tokio::net::TcpListener::bind(bind).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn lead_body(name: &str, email: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "site": "welshmolecatcher-classic",
        "name": name,
        "email": email,
        "message": message,
    })
}

#[tokio::test]
async fn test_valid_lead_is_accepted_with_a_receipt() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/leads"))
        .json(&lead_body("Jane", "jane@x.com", "Help"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
    let receipt: LeadAccepted = response.json().await.unwrap();
    assert!(!receipt.lead_id.to_string().is_empty());

    let stats: LeadStats = client
        .get(format!("{base_url}/api/leads/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.leads_received, 1);
}

#[tokio::test]
async fn test_empty_field_is_rejected_and_not_stored() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/leads"))
        .json(&lead_body("", "jane@x.com", "Help"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let rejection: LeadRejected = response.json().await.unwrap();
    assert_eq!(rejection.error, "invalid lead submission");

    let stats: LeadStats = client
        .get(format!("{base_url}/api/leads/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.leads_received, 0);
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/leads"))
        .json(&lead_body("Jane", "not-an-email", "Help"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn test_lead_without_site_identifier_is_still_accepted() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/leads"))
        .json(&serde_json::json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Help",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn test_non_json_body_is_not_accepted() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/leads"))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();

    assert!(!response.status().is_success());
}

#[tokio::test]
async fn test_recent_returns_accepted_leads_newest_first() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    for name in ["first", "second", "third"] {
        client
            .post(format!("{base_url}/api/leads"))
            .json(&lead_body(name, "jane@x.com", "Help"))
            .send()
            .await
            .unwrap();
    }

    let recent: Vec<serde_json::Value> = client
        .get(format!("{base_url}/api/leads/recent?limit=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["name"], "third");
    assert_eq!(recent[1]["name"], "second");
}

#[tokio::test]
async fn test_health_check_reports_lead_count() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base_url}/api/leads"))
        .json(&lead_body("Jane", "jane@x.com", "Help"))
        .send()
        .await
        .unwrap();

    let health: serde_json::Value = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health["status"], "healthy");
    assert_eq!(health["leads_received"], 1);
}
