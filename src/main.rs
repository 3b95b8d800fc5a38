use anyhow::Context;
use clap::Parser;
use tracing::debug;

use washboard::cli::{run, Cli};
use washboard::{init_logging, AppConfig, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (optional - won't fail if missing)
    // This must happen before any config is read from environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_logging(&config.observability).context("Failed to initialize logging")?;

    debug!(app_name = APP_NAME, version = VERSION, "Starting Washboard CLI");

    run(cli, config).await
}
