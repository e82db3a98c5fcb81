//! Page shell configuration: title, asset URLs, navbar links

use serde::Deserialize;

/// Static parts of the header page
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Document title, also the logo alt text
    pub title: String,
    /// Brand logo image path
    pub logo: String,
    /// Where the brand logo links to
    pub brand_href: String,
    pub account_href: String,
    pub cart_href: String,
    /// External stylesheets, in include order
    pub stylesheets: Vec<String>,
    /// External scripts, in include order
    pub scripts: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Storefront".to_string(),
            logo: "/logo.png".to_string(),
            brand_href: "/".to_string(),
            account_href: "/account".to_string(),
            cart_href: "/cart".to_string(),
            stylesheets: vec![
                "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                    .to_string(),
            ],
            scripts: vec![
                "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"
                    .to_string(),
            ],
        }
    }
}

/// Site settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSite {
    pub title: Option<String>,
    pub logo: Option<String>,
    pub brand_href: Option<String>,
    pub account_href: Option<String>,
    pub cart_href: Option<String>,
    pub stylesheets: Option<Vec<String>>,
    pub scripts: Option<Vec<String>>,
}

impl SiteConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSite>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            title: file.title.unwrap_or(defaults.title),
            logo: file.logo.unwrap_or(defaults.logo),
            brand_href: file.brand_href.unwrap_or(defaults.brand_href),
            account_href: file.account_href.unwrap_or(defaults.account_href),
            cart_href: file.cart_href.unwrap_or(defaults.cart_href),
            stylesheets: file.stylesheets.unwrap_or(defaults.stylesheets),
            scripts: file.scripts.unwrap_or(defaults.scripts),
        }
    }
}
