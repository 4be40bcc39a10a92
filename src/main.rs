use anyhow::Result;
use tripgenie::{TripGenieConfig, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripGenieConfig::load()?;
    telemetry::init(&config.logging)?;

    tracing::info!(version = tripgenie::VERSION, "Starting TripGenie");
    web::run(&config).await
}
