//! Wire messages exchanged with the lead submission endpoint

pub mod lead;

pub use lead::{LeadAccepted, LeadRejected, LeadSubmission};
