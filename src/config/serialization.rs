//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use toml::Value;

use super::Config;

/// TOML basic-string literal, escaped by the toml encoder
fn string(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// TOML array of strings
fn string_array(items: &[String]) -> String {
    Value::Array(items.iter().cloned().map(Value::String).collect()).to_string()
}

impl Config {
    /// Serialize to a commented TOML document that `FileConfig` parses back
    pub fn to_toml(&self) -> String {
        let static_dir = match &self.static_dir {
            Some(dir) => format!("static_dir = {}", string(&dir.display().to_string())),
            None => "# static_dir = \"./public\"".to_string(),
        };

        format!(
            r#"# storefront-nav configuration

# HTTP bind address
bind_addr = "{bind}"

# Ordered category catalog (JSON object keyed by category name)
catalog_path = {catalog}

# Serve static assets such as /logo.png from this directory
{static_dir}

[menu]
# Active section when a request has no ?s= parameter
default_section = {default_section}
# "fixed" always uses default_section; "first-category" uses the first catalog key
fallback = "{fallback}"

[site]
title = {title}
logo = {logo}
brand_href = {brand_href}
account_href = {account_href}
cart_href = {cart_href}
stylesheets = {stylesheets}
scripts = {scripts}

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = {level}
# Write JSON logs to rotating files in addition to stdout
file_enabled = {file_enabled}
file_dir = {file_dir}
# hourly, daily, never
file_rotation = "{rotation}"
file_prefix = {file_prefix}
"#,
            bind = self.bind_addr,
            catalog = string(&self.catalog_path.display().to_string()),
            static_dir = static_dir,
            default_section = string(&self.menu.default_section),
            fallback = self.menu.fallback.as_str(),
            title = string(&self.site.title),
            logo = string(&self.site.logo),
            brand_href = string(&self.site.brand_href),
            account_href = string(&self.site.account_href),
            cart_href = string(&self.site.cart_href),
            stylesheets = string_array(&self.site.stylesheets),
            scripts = string_array(&self.site.scripts),
            level = string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = string(&self.logging.file_dir.display().to_string()),
            rotation = self.logging.file_rotation.as_str(),
            file_prefix = string(&self.logging.file_prefix),
        )
    }
}
