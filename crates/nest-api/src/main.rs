//! CareerNest API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p nest-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use nest_common::telemetry::{init_tracing_with_config, TracingConfig};
use nest_common::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Initialize tracing
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    init_tracing_with_config(&tracing_config);

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Starting CareerNest API server"
    );

    // Run the server
    nest_api::run(config).await?;

    Ok(())
}
