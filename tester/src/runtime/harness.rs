//! In-process webserver lifecycle for end-to-end scenarios
//!
//! Boots the real lead endpoint on an ephemeral port and exposes the URLs
//! and stats the scenarios need. Dropping the harness aborts the server.

use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing::info;

use webserver::{
    LeadStats, WebServer,
    services::{RealLeadNotifier, RealLeadStore},
};

pub struct EndpointHarness {
    base_url: String,
    handle: JoinHandle<()>,
    client: reqwest::Client,
}

impl EndpointHarness {
    /// Boot the lead endpoint on an ephemeral port
    pub async fn start() -> anyhow::Result<Self> {
        let bind: SocketAddr = "127.0.0.1:0".parse()?;
        let server = WebServer::new(bind, RealLeadStore::new(), RealLeadNotifier::new());
        let router = server.build_router();

        let listener = tokio::net::TcpListener::bind(bind).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("Test endpoint error: {e}");
            }
        });

        info!("🌐 Test endpoint listening on {addr}");

        Ok(Self {
            base_url: format!("http://{addr}"),
            handle,
            client: reqwest::Client::new(),
        })
    }

    /// Submission URL for the controller under test
    pub fn leads_url(&self) -> String {
        format!("{}/api/leads", self.base_url)
    }

    /// Leads the endpoint has accepted so far
    pub async fn leads_received(&self) -> anyhow::Result<u64> {
        let stats: LeadStats = self
            .client
            .get(format!("{}/api/leads/stats", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        Ok(stats.leads_received)
    }

    /// Stop the endpoint; the bound port stays dead afterwards
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for EndpointHarness {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
