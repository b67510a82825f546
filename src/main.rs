use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use baby_forecast::{run_server, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("baby_forecast=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();

    let config = ServiceConfig::from_env()?;
    info!(
        "Starting baby_forecast v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.bind_addr
    );

    run_server(config).await
}
