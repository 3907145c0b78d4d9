//! Webserver state management

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub is_running: Arc<AtomicBool>,
    pub leads_received: Arc<AtomicU64>,
    pub server_start_time: Instant,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            is_running: Arc::new(AtomicBool::new(true)),
            leads_received: Arc::new(AtomicU64::new(0)),
            server_start_time: Instant::now(),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Set running state
    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Record one accepted lead
    pub fn record_lead(&self) -> u64 {
        self.leads_received.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Leads accepted since startup
    pub fn get_leads_received(&self) -> u64 {
        self.leads_received.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[tokio::test]
    async fn test_webserver_state_creation() {
        let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

        let state = WebServerState::new(bind_addr);

        assert_eq!(state.bind_address, bind_addr);
        assert!(state.is_running());
        assert_eq!(state.get_leads_received(), 0);
    }

    #[tokio::test]
    async fn test_lead_counter() {
        let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
        let state = WebServerState::new(bind_addr);

        assert_eq!(state.record_lead(), 1);
        assert_eq!(state.record_lead(), 2);
        assert_eq!(state.get_leads_received(), 2);
    }

    #[tokio::test]
    async fn test_running_flag() {
        let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
        let state = WebServerState::new(bind_addr);

        assert!(state.is_running());
        state.set_running(false);
        assert!(!state.is_running());
    }
}
