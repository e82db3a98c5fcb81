// storefront-nav - Storefront header and category navigation
//
// Serves the storefront page header: a fixed HTML shell plus a category menu
// built from an ordered catalog, with the current section highlighted.
//
// Architecture:
// - Catalog: ordered category names, loaded once and shared read-only
// - Menu: selector resolution and the ordered entry sequence
// - Render (maud): auto-escaped menu fragment and page shell
// - Server (axum): page, fragment and JSON routes

mod catalog;
mod cli;
mod config;
mod logging;
mod menu;
mod render;
mod server;
mod startup;

use anyhow::Result;
use catalog::Catalog;
use config::Config;
use logging::ConsoleTarget;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (render, config)
    if cli::handle_cli()? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;

    // Keep the guard alive so buffered file logs flush on exit
    let _file_guard = logging::init(&config.logging, ConsoleTarget::Stdout);

    // A missing catalog degrades to an empty menu, never a failed start
    let catalog = Catalog::load_or_empty(&config.catalog_path);

    startup::print_startup(&config, &catalog);

    let state = server::AppState::new(catalog, config.menu.clone(), config.site.clone());

    // Oneshot: fires once on Ctrl+C
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let mut server_handle = tokio::spawn(server::start_server(config, state, shutdown_rx));

    let interrupted = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            true
        }
        result = &mut server_handle => {
            // Server exited on its own (bind failure, serve error)
            result??;
            false
        }
    };

    if interrupted {
        tracing::info!("Shutting down...");
        // If the send fails the server already stopped
        let _ = shutdown_tx.send(());
        server_handle.await??;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
