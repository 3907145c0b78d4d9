//! Shared types for the lead capture system
//!
//! Contains only truly shared types: the wire contract between the lead
//! form controller and the submission endpoint, common identifiers, the
//! submit failure taxonomy, and tracing setup. Component-internal types
//! (draft state, stored leads) are kept in their respective components.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export the wire contract bodies
pub use messages::{LeadAccepted, LeadRejected, LeadSubmission};
