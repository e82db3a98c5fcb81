//! Category menu model
//!
//! Resolves the current-section selector from the request and turns the
//! catalog into an ordered sequence of menu entries. Rendering lives in
//! [`crate::render`]; this module only decides what the entries are.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::{DefaultFallback, MenuConfig};

/// Characters escaped when a category name is placed in the `s` query value.
/// `+` is included because form decoding reads it as a space.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Non-fatal menu conditions. Neither one changes the response status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Catalog absent or empty; the menu renders with no entries
    #[error("catalog is missing or empty")]
    MissingCatalog,

    /// The `s` parameter could not be read as a single string
    #[error("invalid section selector: {0}")]
    InvalidSelector(String),
}

/// Query parameters accepted by the page and fragment routes
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Current section, e.g. `?s=Boots`
    pub s: Option<String>,
}

/// Which category is the current section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Taken verbatim from the request
    Requested(String),
    /// No `s` parameter, default applied
    Default(String),
    /// Nothing can be active
    Unmatched,
}

impl Selector {
    /// Apply the default step to an optional request parameter
    pub fn resolve(param: Option<String>, menu: &MenuConfig, catalog: &Catalog) -> Self {
        if let Some(requested) = param {
            return Self::Requested(requested);
        }

        match menu.fallback {
            DefaultFallback::Fixed => Self::Default(menu.default_section.clone()),
            DefaultFallback::FirstCategory => match catalog.first() {
                Some(first) => Self::Default(first.to_string()),
                None => Self::Unmatched,
            },
        }
    }

    /// The section string, or `None` when nothing can be active
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Requested(s) | Self::Default(s) => Some(s),
            Self::Unmatched => None,
        }
    }

    /// Exact, case-sensitive comparison
    pub fn matches(&self, key: &str) -> bool {
        self.as_str() == Some(key)
    }
}

/// One rendered menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub name: &'a str,
    pub href: String,
    pub active: bool,
}

/// Link target for a category: `/?s=<key>`
pub fn section_href(name: &str) -> String {
    format!("/?s={}", utf8_percent_encode(name, QUERY_VALUE_ENCODE_SET))
}

/// Menu entries in catalog order, one per key
pub fn entries<'a>(
    catalog: &'a Catalog,
    selector: &'a Selector,
) -> impl Iterator<Item = MenuEntry<'a>> + 'a {
    catalog.names().map(move |name| MenuEntry {
        name,
        href: section_href(name),
        active: selector.matches(name),
    })
}
