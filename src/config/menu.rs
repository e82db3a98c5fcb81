//! Menu configuration: what counts as the current section when the request
//! doesn't say.

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Section used when a request carries no `s` parameter
pub const DEFAULT_SECTION: &str = "Sneakers";

/// How the default section is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefaultFallback {
    /// Always `default_section`, whether or not the catalog has it (default)
    #[default]
    Fixed,
    /// The first catalog key
    FirstCategory,
}

impl DefaultFallback {
    /// Parse fallback string from config; `None` for an unknown policy
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "first-category" | "first_category" | "first" => Some(Self::FirstCategory),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::FirstCategory => "first-category",
        }
    }
}

/// Menu configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Active section when `s` is absent and fallback is `fixed`
    pub default_section: String,
    pub fallback: DefaultFallback,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
            fallback: DefaultFallback::Fixed,
        }
    }
}

/// Menu settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMenu {
    pub default_section: Option<String>,
    pub fallback: Option<String>,
}

impl MenuConfig {
    /// Create from file config with defaults
    ///
    /// A misspelled `fallback` is an error, not a silent `fixed`.
    pub fn from_file(file: Option<FileMenu>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let fallback = match file.fallback {
            Some(s) => DefaultFallback::parse(&s).ok_or_else(|| {
                anyhow!(
                    "Unknown [menu] fallback {:?} (expected \"fixed\" or \"first-category\")",
                    s
                )
            })?,
            None => defaults.fallback,
        };

        Ok(Self {
            default_section: file.default_section.unwrap_or(defaults.default_section),
            fallback,
        })
    }
}
