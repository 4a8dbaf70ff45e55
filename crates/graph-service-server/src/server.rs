//! Router assembly and the listening loop.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::log_requests;
use crate::routes::{algorithms, auth, blog, health};
use crate::state::AppState;

/// Build the full application router around `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(blog::router())
        .nest("/auth", auth::router())
        .nest("/api", algorithms::router())
        .route("/health", get(health::health))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        anyhow::anyhow!("Failed to bind {}: {}", addr, e)
    })?;

    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("HTTP server error: {}", e);
            anyhow::anyhow!("HTTP server error: {}", e)
        })?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
