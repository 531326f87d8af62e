//! Green environment of the blue-green deployment demo

use common::{Config, Environment};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing, verbose only when debug mode is requested
    service::logging::init("green_service", config.debug);

    info!("🟩 Starting green environment");

    service::run(Environment::green(), config).await?;

    Ok(())
}
