//! Application state

use common::{Environment, Result};
use tokio::net::TcpListener;
use tracing::warn;

/// Shared application state, immutable once the server starts
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Environment,
    pub hostname: String,
    pub port: u16,
}

impl AppState {
    pub fn new(environment: Environment, hostname: impl Into<String>, port: u16) -> Self {
        Self {
            environment,
            hostname: hostname.into(),
            port,
        }
    }

    /// State reporting the port `listener` actually bound, which differs from
    /// the configured one when `PORT=0`
    pub fn for_listener(
        environment: Environment,
        hostname: impl Into<String>,
        listener: &TcpListener,
    ) -> Result<Self> {
        let port = listener.local_addr()?.port();
        Ok(Self::new(environment, hostname, port))
    }
}

/// Read the machine hostname, falling back to "unknown"
pub fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            warn!("Could not read hostname: {}", e);
            "unknown".to_string()
        }
    }
}
