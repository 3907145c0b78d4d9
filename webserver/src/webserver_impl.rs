//! Main webserver implementation
//!
//! This module contains the main WebServer struct that wires the lead
//! store and notifier services into the HTTP surface using dependency
//! injection.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};
use validator::Validate;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::{LeadNotifier, LeadStore};
use crate::types::{LeadStats, StoredLead};
use shared::{LeadAccepted, LeadRejected, LeadSubmission};

/// Main webserver struct with dependency injection
#[derive(Clone)]
pub struct WebServer<S, N>
where
    S: LeadStore,
    N: LeadNotifier,
{
    state: Arc<WebServerState>,
    lead_store: S,
    notifier: N,
}

impl<S, N> WebServer<S, N>
where
    S: LeadStore + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(bind_address: SocketAddr, lead_store: S, notifier: N) -> Self {
        let state = Arc::new(WebServerState::new(bind_address));

        Self {
            state,
            lead_store,
            notifier,
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Lead API routes
            .route("/api/leads", post(submit_lead_handler))
            .route("/api/leads/stats", get(stats_handler))
            .route("/api/leads/recent", get(recent_handler))
            // Health check
            .route("/health", get(health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // The landing pages post cross-origin
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the webserver
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.state.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup {
                message: format!("failed to bind to {}: {e}", self.state.bind_address),
            })?;

        println!(
            "🌐 Lead endpoint listening on http://{}",
            self.state.bind_address
        );

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("Server error: {e}");
            }
        });

        tokio::select! {
            _ = server_task => {
                println!("HTTP server task completed");
            },
            _ = tokio::signal::ctrl_c() => {
                println!("Received shutdown signal");
                self.state.set_running(false);
            }
        }

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}

// HTTP Handlers

/// Accept or reject one lead submission - POST /api/leads
async fn submit_lead_handler<S, N>(
    State(server): State<WebServer<S, N>>,
    Json(submission): Json<LeadSubmission>,
) -> Result<(StatusCode, Json<LeadAccepted>), (StatusCode, Json<LeadRejected>)>
where
    S: LeadStore + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    if let Err(e) = submission.validate() {
        warn!("rejected lead submission: {e}");
        // Generic rejection; no field detail leaves the server
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LeadRejected {
                error: "invalid lead submission".to_string(),
            }),
        ));
    }

    let lead = StoredLead::from_submission(submission);

    let lead_id = server.lead_store.store(lead.clone()).await.map_err(|e| {
        eprintln!("Failed to store lead: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(LeadRejected {
                error: "storage failure".to_string(),
            }),
        )
    })?;

    // The lead is already stored; a notification failure must not turn
    // the accept into a reject
    if let Err(e) = server.notifier.notify(&lead).await {
        eprintln!("Failed to notify about lead {}: {e}", lead.lead_id);
    }

    server.state.record_lead();
    debug!(lead_id = %lead_id, "accepted lead");

    Ok((StatusCode::CREATED, Json(LeadAccepted { lead_id })))
}

/// Operator stats - GET /api/leads/stats
async fn stats_handler<S, N>(State(server): State<WebServer<S, N>>) -> Json<LeadStats>
where
    S: LeadStore + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    Json(LeadStats {
        leads_received: server.lead_store.count().await,
        uptime_seconds: server.state.get_uptime_seconds(),
    })
}

#[derive(Debug, Deserialize)]
struct RecentParams {
    limit: Option<usize>,
}

/// Most recent accepted leads for the operator - GET /api/leads/recent
async fn recent_handler<S, N>(
    State(server): State<WebServer<S, N>>,
    Query(params): Query<RecentParams>,
) -> Json<Vec<StoredLead>>
where
    S: LeadStore + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    let limit = params.limit.unwrap_or(20);
    Json(server.lead_store.recent(limit).await)
}

/// Health check endpoint
async fn health_check<S, N>(State(server): State<WebServer<S, N>>) -> Json<serde_json::Value>
where
    S: LeadStore + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    Json(json!({
        "status": "healthy",
        "uptime": server.state.get_uptime_seconds(),
        "leads_received": server.state.get_leads_received(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
