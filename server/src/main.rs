use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use music_core::{FakeBackend, MusicBackend, MusicGenerator};
use server::app::{build_router, AppState};
use server::backend::{HttpBackend, HttpBackendConfig};
use server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let config = ServerConfig::from_env();

    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    info!("Starting music generation server...");

    let backend: Arc<dyn MusicBackend> = match config.backend_url.clone() {
        Some(url) => {
            info!("Connecting to model backend at {url}");
            let backend = HttpBackend::new(
                HttpBackendConfig::new(url.clone()).with_timeout(config.backend_timeout_secs),
            )?;
            // A backend that cannot serve at startup is fatal; do not begin
            // serving requests in a broken state.
            if !backend.health_check().await {
                anyhow::bail!("model backend at {url} is not ready, refusing to start");
            }
            Arc::new(backend)
        }
        None if config.debug => {
            warn!("BACKEND_URL not set, using fake backend (debug mode)");
            Arc::new(FakeBackend::new())
        }
        None => {
            anyhow::bail!("BACKEND_URL must be set (or DEBUG=true for the fake backend)")
        }
    };

    let generator = Arc::new(MusicGenerator::new(backend));
    let state = AppState::new(generator, config.clone());
    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}. Try a different PORT."))?;

    info!("Server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
