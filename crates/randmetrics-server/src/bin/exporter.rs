//! Custom-collector random number exporter: the value is computed on demand
//! when a scrape arrives, and after a fixed number of collection passes the
//! collector stops emitting, so the metric vanishes from the body instead of
//! reporting a stale value.

use std::sync::Arc;

use clap::Parser;
use rand::Rng;
use randmetrics_core::{BoundedCollector, MetricsRegistry};
use randmetrics_server::{AppState, metrics_router, random_number_descriptor};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Collection passes served before the metric vanishes. Deliberately small so
/// the disappearance is observable within a few scrapes.
const COLLECT_PASS_LIMIT: u64 = 5;

#[derive(Parser)]
#[command(name = "exporter", about = "Custom-collector random number exporter")]
struct Cli {
    /// The address to listen on for HTTP requests.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen_address: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Debug for the core crate so each collection pass is visible, mirroring
    // the demo's point of watching the counter advance.
    let env_filter = EnvFilter::from_default_env()
        .add_directive("exporter=info".parse()?)
        .add_directive("randmetrics_core=debug".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let registry = Arc::new(MetricsRegistry::new());
    registry.register(Arc::new(BoundedCollector::new(
        random_number_descriptor(),
        COLLECT_PASS_LIMIT,
        || rand::rng().random(),
    )))?;

    let app = metrics_router(Arc::new(AppState::new(registry)));

    let listener = tokio::net::TcpListener::bind(&cli.listen_address).await?;
    info!("running server at {}", cli.listen_address);
    axum::serve(listener, app).await?;

    Ok(())
}
