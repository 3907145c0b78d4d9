//! Shared logging utilities for consistent tracing across components

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::info;

/// Identity of a running component, used for log filtering defaults
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentId {
    Controller,
    WebServer,
    Tester,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Controller => write!(f, "controller"),
            ComponentId::WebServer => write!(f, "webserver"),
            ComponentId::Tester => write!(f, "tester"),
        }
    }
}

/// Initialize tracing subscriber with component-specific defaults
pub fn init_tracing(component: ComponentId) {
    init_tracing_with_level(component, None);
}

/// Initialize tracing subscriber with an explicit base log level
pub fn init_tracing_with_level(component: ComponentId, log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");

    let env_filter = match component {
        ComponentId::Controller => {
            format!("controller={base_level},shared={base_level},reqwest=warn")
        }
        ComponentId::WebServer => {
            format!("webserver={base_level},shared={base_level},tower_http=warn,axum={base_level}")
        }
        ComponentId::Tester => {
            format!(
                "tester={base_level},controller={base_level},webserver={base_level},shared={base_level}"
            )
        }
    };

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &ComponentId, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &ComponentId, reason: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}
