//! Configuration tests
//!
//! Precedence (env > file > defaults) and TOML round-trips. When you add a
//! config field, add it to `to_toml()` and extend the round-trip test below.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse back into the same effective config.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env).unwrap();
    assert_eq!(reloaded.bind_addr, config.bind_addr);
    assert_eq!(reloaded.catalog_path, config.catalog_path);
    assert_eq!(reloaded.static_dir, None);
    assert_eq!(reloaded.menu, config.menu);
    assert_eq!(reloaded.site, config.site);
    assert_eq!(reloaded.logging.level, config.logging.level);
    assert_eq!(reloaded.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.static_dir = Some(PathBuf::from("./public"));
    config.menu.default_section = "Boots".to_string();
    config.menu.fallback = DefaultFallback::FirstCategory;
    config.site.title = "Shoe \"Barn\"".to_string();
    config.site.scripts.clear();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let toml_str = config.to_toml();
    let file = Config::parse_file_config(&toml_str).unwrap();
    let reloaded = Config::from_sources(file, no_env).unwrap();

    assert_eq!(reloaded.static_dir, Some(PathBuf::from("./public")));
    assert_eq!(reloaded.menu, config.menu);
    assert_eq!(reloaded.site.title, "Shoe \"Barn\"");
    assert!(reloaded.site.scripts.is_empty());
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_config_roundtrip_control_and_format_characters() {
    let mut config = Config::default();
    config.catalog_path = PathBuf::from("./cata\u{200b}log.json");
    config.static_dir = Some(PathBuf::from("./pub\u{feff}lic"));
    config.menu.default_section = "Soft\u{ad}Shell".to_string();
    config.site.title = "Tab\there\u{7}".to_string();
    config.site.stylesheets = vec!["/a\nb.css".to_string(), "/c'\"d\\.css".to_string()];
    config.logging.file_prefix = "log\u{1b}[0m".to_string();

    let toml_str = config.to_toml();
    let file = Config::parse_file_config(&toml_str)
        .unwrap_or_else(|e| panic!("TOML:\n{}\nError: {:?}", toml_str, e));
    let reloaded = Config::from_sources(file, no_env).unwrap();

    assert_eq!(reloaded.catalog_path, config.catalog_path);
    assert_eq!(reloaded.static_dir, config.static_dir);
    assert_eq!(reloaded.menu, config.menu);
    assert_eq!(reloaded.site, config.site);
    assert_eq!(reloaded.logging.file_prefix, config.logging.file_prefix);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::from_sources(FileConfig::default(), no_env).unwrap();

    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.bind_addr, Config::default().bind_addr);
    assert_eq!(config.catalog_path, PathBuf::from("./catalog.json"));
    assert_eq!(config.menu.default_section, "Sneakers");
    assert_eq!(config.menu.fallback, DefaultFallback::Fixed);
    assert_eq!(config.site.logo, "/logo.png");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_file_overrides_defaults() {
    let file = Config::parse_file_config(
        r#"
bind_addr = "0.0.0.0:3000"
catalog_path = "/srv/catalog.json"

[menu]
default_section = "Boots"
fallback = "first-category"

[site]
title = "Shoe Barn"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
    assert_eq!(config.menu.default_section, "Boots");
    assert_eq!(config.menu.fallback, DefaultFallback::FirstCategory);
    assert_eq!(config.site.title, "Shoe Barn");
    // Untouched keys keep defaults
    assert_eq!(config.site.cart_href, "/cart");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
bind_addr = "0.0.0.0:3000"
catalog_path = "/srv/catalog.json"

[menu]
default_section = "Boots"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("STOREFRONT_BIND", "127.0.0.1:9999"),
        ("STOREFRONT_CATALOG", "/tmp/other.json"),
        ("STOREFRONT_STATIC_DIR", "/srv/public"),
        ("STOREFRONT_DEFAULT_SECTION", "Sandals"),
    ]);
    let config = Config::from_sources(file, env).unwrap();

    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9999");
    assert_eq!(config.catalog_path, PathBuf::from("/tmp/other.json"));
    assert_eq!(config.static_dir, Some(PathBuf::from("/srv/public")));
    assert_eq!(config.menu.default_section, "Sandals");
}

#[test]
fn test_invalid_bind_addr_is_error() {
    let env = env_from(&[("STOREFRONT_BIND", "not-an-address")]);
    let err = Config::from_sources(FileConfig::default(), env).unwrap_err();
    assert!(err.to_string().contains("not-an-address"));
}

#[test]
fn test_empty_static_dir_means_unset() {
    let env = env_from(&[("STOREFRONT_STATIC_DIR", "")]);
    let config = Config::from_sources(FileConfig::default(), env).unwrap();
    assert_eq!(config.static_dir, None);
}

#[test]
fn test_malformed_file_is_error() {
    assert!(Config::parse_file_config("bind_addr = ").is_err());
    assert!(Config::parse_file_config("[menu]\nfallback = 3").is_err());
}

#[test]
fn test_unknown_fallback_is_error() {
    let file = Config::parse_file_config("[menu]\nfallback = \"first-categroy\"").unwrap();
    let err = Config::from_sources(file, no_env).unwrap_err();
    assert!(err.to_string().contains("first-categroy"));
}

#[test]
fn test_fallback_and_rotation_parsing() {
    assert_eq!(DefaultFallback::parse("fixed"), Some(DefaultFallback::Fixed));
    assert_eq!(
        DefaultFallback::parse("First-Category"),
        Some(DefaultFallback::FirstCategory)
    );
    assert_eq!(DefaultFallback::parse("bogus"), None);

    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
