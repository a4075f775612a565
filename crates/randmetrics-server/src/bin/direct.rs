//! Directly instrumented random number exporter: a background task overwrites
//! the gauge every 10 seconds; scrapes read whatever value is current.

use std::{sync::Arc, time::Duration};

use clap::Parser;
use randmetrics_core::{MetricsRegistry, RandomGauge};
use randmetrics_server::{AppState, metrics_router, random_number_descriptor};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "direct", about = "Directly instrumented random number exporter")]
struct Cli {
    /// The address to listen on for HTTP requests.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen_address: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("direct=info".parse()?)
        .add_directive("randmetrics_core=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let registry = Arc::new(MetricsRegistry::new());
    let gauge = Arc::new(RandomGauge::new(random_number_descriptor()));
    registry.register(gauge.clone())?;

    let ticker = Arc::clone(&gauge);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(10));
        loop {
            interval.tick().await;
            ticker.tick();
        }
    });

    let app = metrics_router(Arc::new(AppState::new(registry)));

    let listener = tokio::net::TcpListener::bind(&cli.listen_address).await?;
    info!("running server at {}", cli.listen_address);
    axum::serve(listener, app).await?;

    Ok(())
}
