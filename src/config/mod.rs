//! Configuration for the storefront header server
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/storefront-nav/config.toml, or $STOREFRONT_CONFIG)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod menu;
mod observability;
mod serialization;
mod site;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use menu::{DefaultFallback, FileMenu, MenuConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use site::{FileSite, SiteConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
const DEFAULT_CATALOG_PATH: &str = "./catalog.json";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_addr: SocketAddr,

    /// JSON file holding the ordered category catalog
    pub catalog_path: PathBuf,

    /// Directory served as a static fallback (logo, css); unset = 404
    pub static_dir: Option<PathBuf>,

    /// Current-section defaults
    pub menu: MenuConfig,

    /// Page shell: title, assets, navbar links
    pub site: SiteConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            static_dir: None,
            menu: MenuConfig::default(),
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub catalog_path: Option<String>,
    pub static_dir: Option<String>,

    /// Optional [menu] section
    pub menu: Option<FileMenu>,

    /// Optional [site] section
    pub site: Option<FileSite>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path
    ///
    /// `STOREFRONT_CONFIG` overrides; otherwise ~/.config/storefront-nav/config.toml.
    /// Uses Unix-style ~/.config on all platforms for consistency.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("STOREFRONT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|p| p.join(".config").join("storefront-nav").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Ignore errors - config is optional
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but can't be read
    /// or parsed is an error: a broken config should fail fast rather than
    /// silently fall back while the user debugs the wrong thing.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        // Bind address: env > file > default
        let bind_addr = match env("STOREFRONT_BIND").or(file.bind_addr) {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid bind address {:?}", addr))?,
            None => DEFAULT_BIND_ADDR,
        };

        // Catalog: env > file > default
        let catalog_path = env("STOREFRONT_CATALOG")
            .or(file.catalog_path)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        // Static dir: env > file > unset
        let static_dir = env("STOREFRONT_STATIC_DIR")
            .or(file.static_dir)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        // Default section: env overrides whatever the file says
        let mut menu = MenuConfig::from_file(file.menu)?;
        if let Some(section) = env("STOREFRONT_DEFAULT_SECTION") {
            menu.default_section = section;
        }

        let site = SiteConfig::from_file(file.site);
        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            bind_addr,
            catalog_path,
            static_dir,
            menu,
            site,
            logging,
        })
    }
}
