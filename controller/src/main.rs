//! Lead form CLI entry point
//!
//! Drives one submission attempt against the lead submission endpoint, the
//! same flow the landing-page variants run in a browser. Required fields
//! are enforced here on the input surface, not by the controller.

use clap::Parser;
use std::env;

use controller::{
    ControllerError, ControllerResult, FieldName, FormController, RealSubmissionEndpoint,
    ResubmitPolicy, SitePresentation, SubmissionStatus, detect_decorator, status_line,
};
use shared::logging::{self, ComponentId};

const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8080/api/leads";

#[derive(Parser)]
#[command(name = "controller")]
#[command(about = "Lead form controller for the pest-control landing pages")]
struct Args {
    /// Lead submission endpoint URL (falls back to LEAD_ENDPOINT_URL)
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Presentation variant submitting the lead
    #[arg(long, default_value = "welshmolecatcher-classic")]
    site: String,

    /// Lead name
    #[arg(long)]
    name: String,

    /// Lead email
    #[arg(long)]
    email: String,

    /// Lead message
    #[arg(long)]
    message: String,

    /// Allow concurrent resubmission (observed legacy page behavior)
    #[arg(long)]
    allow_concurrent: bool,
}

#[tokio::main]
async fn main() -> ControllerResult<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing(ComponentId::Controller);

    let args = Args::parse();

    let endpoint_url = args
        .endpoint_url
        .or_else(|| env::var("LEAD_ENDPOINT_URL").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

    let presentation =
        SitePresentation::by_key(&args.site).ok_or_else(|| ControllerError::ConfigError {
            message: format!("unknown site variant: {}", args.site),
        })?;

    println!("Submitting lead for {} via {endpoint_url}", presentation.site);
    println!("{}", presentation.contact_banner());

    let endpoint = RealSubmissionEndpoint::new(&endpoint_url)?;
    let policy = if args.allow_concurrent {
        ResubmitPolicy::AllowConcurrent
    } else {
        ResubmitPolicy::BlockWhilePending
    };
    let form = FormController::with_policy(presentation.site.clone(), endpoint, policy);

    form.update_field(FieldName::Name, args.name).await;
    form.update_field(FieldName::Email, args.email).await;
    form.update_field(FieldName::Message, args.message).await;

    let decorator = detect_decorator();
    let status = form.submit().await;

    if let Some(line) = status_line(status, decorator.as_ref()) {
        println!("{line}");
    }

    if status == SubmissionStatus::Error {
        std::process::exit(1);
    }

    Ok(())
}
