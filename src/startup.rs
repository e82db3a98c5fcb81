// Startup module - displays banner and loading status
//
// Printed once before the server starts accepting requests:
// - Version info and branding
// - Configuration source
// - Catalog and asset status

use crate::catalog::Catalog;
use crate::config::{Config, DefaultFallback, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// One line of the status list
pub struct ComponentStatus {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

/// Status of each component given the loaded config and catalog
pub fn component_status(config: &Config, catalog: &Catalog) -> Vec<ComponentStatus> {
    let default_detail = match config.menu.fallback {
        DefaultFallback::Fixed => format!("default section {:?}", config.menu.default_section),
        DefaultFallback::FirstCategory => "default section = first category".to_string(),
    };

    vec![
        ComponentStatus {
            name: "catalog",
            ok: !catalog.is_empty(),
            detail: if catalog.is_empty() {
                format!("empty ({})", config.catalog_path.display())
            } else {
                format!(
                    "{} categories ({})",
                    catalog.len(),
                    config.catalog_path.display()
                )
            },
        },
        ComponentStatus {
            name: "menu",
            ok: true,
            detail: default_detail,
        },
        ComponentStatus {
            name: "static",
            ok: config.static_dir.is_some(),
            detail: match &config.static_dir {
                Some(dir) => dir.display().to_string(),
                None => "not served".to_string(),
            },
        },
        ComponentStatus {
            name: "file-log",
            ok: config.logging.file_enabled,
            detail: if config.logging.file_enabled {
                config.logging.file_dir.display().to_string()
            } else {
                "off".to_string()
            },
        },
    ]
}

/// Print the startup banner and component status
pub fn print_startup(config: &Config, catalog: &Catalog) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}storefront-nav{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Storefront header and category navigation{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for status in component_status(config, catalog) {
        let icon = if status.ok {
            format!("{GREEN}✓{RESET}")
        } else {
            format!("{YELLOW}○{RESET}")
        };
        println!(
            "    {icon} {:<10} {DIM}{}{RESET}",
            status.name, status.detail
        );
    }
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Listening on {BOLD}http://{}{RESET}",
        config.bind_addr
    );
    println!();
}
