//! WebServer binary entry point

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use shared::logging::{self, ComponentId};
use webserver::{
    WebServer, WebServerResult,
    services::{RealLeadNotifier, RealLeadStore},
};

#[derive(Parser)]
#[command(name = "webserver")]
#[command(about = "Lead submission endpoint for the pest-control landing pages")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind_addr: SocketAddr,

    /// Append accepted leads to this JSONL file
    #[arg(long)]
    persist_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    logging::init_tracing(ComponentId::WebServer);

    let args = Args::parse();

    logging::log_startup(
        &ComponentId::WebServer,
        &format!("lead endpoint on {}", args.bind_addr),
    );

    let lead_store = match &args.persist_path {
        Some(path) => {
            println!("Persisting leads to {}", path.display());
            RealLeadStore::with_persistence(path)
        }
        None => RealLeadStore::new(),
    };
    let notifier = RealLeadNotifier::new();

    let server = WebServer::new(args.bind_addr, lead_store, notifier);
    server.run().await?;

    logging::log_shutdown(&ComponentId::WebServer, "lead endpoint stopped");
    Ok(())
}
