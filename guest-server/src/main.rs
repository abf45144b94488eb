//! guest-server: guest-facing event seating lookup
//!
//! - Relays event and guest calls to the upstream event API
//! - Computes seating charts for client-side painters
//! - Serves the server-rendered guest page with check-in

mod api;
mod cache;
mod config;
mod logger;
mod page;
mod state;

use anyhow::Context;

use cache::PURGE_INTERVAL;
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!("Starting guest-server (env: {})", config.environment);

    let state = AppState::new(&config);

    // Periodic event cache purge
    if state.event_cache.is_enabled() {
        let cache = state.event_cache.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(PURGE_INTERVAL);
            loop {
                interval.tick().await;
                let purged = cache.purge_expired().await;
                if purged > 0 {
                    tracing::debug!(purged, "Purged expired events");
                }
            }
        });
    }

    let app = api::build_app(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("Failed to bind {http_addr}"))?;
    tracing::info!("guest-server HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("guest-server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
