//! E2E Testing Framework
//!
//! End-to-end scenarios for the lead capture flow: the real controller is
//! driven against the real submission endpoint, booted in-process on an
//! ephemeral port.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tester::scenarios;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let results = scenarios::run_all().await?;
//! assert!(results.iter().all(|r| r.passed));
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod runtime;
pub mod scenarios;
pub mod testing;

// Main interfaces - re-exported at crate root for convenience
pub use runtime::EndpointHarness;
pub use testing::ScenarioResult;
