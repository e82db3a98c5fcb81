// CLI module - command-line argument parsing and handlers
//
// With no subcommand the server runs. Subcommands:
// - render: print the header page (or just the menu) to stdout
// - config --show / --path / --reset: configuration management

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

use crate::catalog::Catalog;
use crate::config::{Config, VERSION};
use crate::logging::{self, ConsoleTarget};
use crate::menu::Selector;
use crate::render;

/// Storefront header and category navigation server
#[derive(Parser)]
#[command(name = "storefront-nav")]
#[command(version = VERSION)]
#[command(about = "Storefront header and category navigation server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the header to stdout using the configured catalog
    Render {
        /// Current section, as if requested with ?s=<SECTION>
        #[arg(long, short)]
        section: Option<String>,

        /// Print only the menu <li> items
        #[arg(long)]
        fragment: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { section, fragment }) => {
            handle_render(section, fragment)?;
            Ok(true)
        }
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show()?;
            } else if reset {
                handle_config_reset()?;
            } else {
                println!("Usage: storefront-nav config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the server
    }
}

/// Render once, same output as the HTTP routes
pub fn render_to_string(
    config: &Config,
    catalog: &Catalog,
    section: Option<String>,
    fragment: bool,
) -> String {
    let selector = Selector::resolve(section, &config.menu, catalog);
    let menu = render::menu_for(catalog, &selector);

    if fragment {
        menu.into_string()
    } else {
        render::page(&config.site, menu).into_string()
    }
}

fn handle_render(section: Option<String>, fragment: bool) -> Result<()> {
    let config = Config::from_env()?;

    // Logs to stderr so stdout carries only HTML
    let _guard = logging::init(&config.logging, ConsoleTarget::Stderr);

    let catalog = Catalog::load_or_empty(&config.catalog_path);
    let html = render_to_string(&config, &catalog, section, fragment);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", html).context("Failed to write to stdout")?;
    Ok(())
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
