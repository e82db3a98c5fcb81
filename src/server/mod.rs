// Server module - HTTP front for the storefront header
//
// Serves the header page and its menu fragment. The catalog is injected
// through router state and never mutated after startup.

mod error;
mod handlers;
mod state;

use std::path::Path;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;

pub use state::AppState;

/// Build the router
///
/// With a static directory configured, unknown paths fall through to it
/// (that's where `/logo.png` lives); otherwise they get a plain 404.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/partials/menu", get(handlers::menu_fragment))
        .route("/api/categories", get(handlers::categories));

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app.fallback(handlers::not_found),
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Start the HTTP server and run until `shutdown_rx` fires
pub async fn start_server(
    config: Config,
    state: AppState,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let bind_addr = config.bind_addr;
    let app = router(state, config.static_dir.as_deref());

    tracing::info!("Starting server on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!("Server listening on {}", bind_addr);

    // Stop accepting on shutdown, let in-flight requests finish
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
