//! E2E Test Runner
//!
//! Runs the lead-flow scenario matrix against an in-process endpoint and
//! reports a pass/fail summary.

use clap::Parser;
use std::time::Duration;
use tokio::time::timeout;

use shared::logging::{self, ComponentId};
use tester::scenarios;

#[derive(Parser)]
#[command(name = "tester")]
#[command(about = "End-to-end scenarios for the lead capture flow")]
struct Args {
    /// Scenario to run: accepted, rejected, endpoint-down, retry,
    /// resubmit, variants, or all
    #[arg(long, default_value = "all")]
    scenario: String,

    /// Test timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing(ComponentId::Tester);

    let args = Args::parse();
    tracing::info!("🧪 Starting lead-flow scenarios: {}", args.scenario);

    let results = timeout(
        Duration::from_secs(args.timeout_secs),
        scenarios::run_scenario(&args.scenario),
    )
    .await
    .map_err(|_| format!("scenarios timed out after {}s", args.timeout_secs))??;

    let mut failed = 0;
    for result in &results {
        if result.passed {
            tracing::info!("✅ {}: PASSED", result.name);
        } else {
            failed += 1;
            for failure in &result.failures {
                tracing::error!("❌ {}: {}", result.name, failure);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} scenario(s) failed").into());
    }

    tracing::info!("🏁 All {} scenario(s) passed", results.len());
    Ok(())
}
