//! Lead submission endpoint for the pest-control landing pages
//!
//! This library provides the server side of the lead capture flow: an HTTP
//! endpoint that validates incoming lead payloads, stores accepted leads,
//! notifies the operator, and answers with an unambiguous accept/reject
//! signal.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{LeadNotifier, LeadStore};

// Re-export service implementations
pub use services::{RealLeadNotifier, RealLeadStore};
