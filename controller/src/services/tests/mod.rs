//! Service tests for the controller
//!
//! HTTP-level endpoint client behavior is simulated with wiremock; the
//! decorator fallback is exercised directly.

mod decorator;
