//! Blue environment of the blue-green deployment demo

use common::{Config, Environment};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing, verbose only when debug mode is requested
    service::logging::init("blue_service", config.debug);

    info!("🟦 Starting blue environment");

    service::run(Environment::blue(), config).await?;

    Ok(())
}
