//! HTTP service shared by the blue and green deployments

use axum::{routing::get, Router};
use common::{Config, Environment, Error, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the router for one environment
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home::home))
        .route("/health", get(routes::health::health))
        .route("/info", get(routes::info::info))
        .fallback(routes::fallback::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener once. Failure is fatal, there is no retry.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|e| Error::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })
}

/// Serve requests on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Run the service for `environment` until SIGINT or SIGTERM
pub async fn run(environment: Environment, config: Config) -> Result<()> {
    if config.debug {
        warn!("🐛 Debug mode enabled, do not expose this instance publicly");
    }

    let addr = config.bind_addr();
    let listener = match bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };
    let addr = listener.local_addr()?;

    let hostname = state::resolve_hostname();
    let state = Arc::new(AppState::for_listener(environment, hostname, &listener)?);
    info!(
        "🚀 {} v{} listening on {} (host {})",
        environment.name, environment.version, addr, state.hostname
    );

    serve(listener, state, shutdown_signal()).await?;

    info!("👋 {} environment stopped", environment.name);
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Received Ctrl-C, shutting down"),
        _ = terminate => info!("🛑 Received SIGTERM, shutting down"),
    }
}
