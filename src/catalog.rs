//! Category catalog
//!
//! The catalog is an ordered mapping from category name to item data. Item
//! records are opaque here; only the key set and its order feed the menu.
//! It is loaded once at startup and shared read-only behind an `Arc`.

use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::menu::MenuError;

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// Ordered category name -> item data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: IndexMap<String, Value>,
}

impl Catalog {
    /// Build a catalog from bare names (item data left as `null`)
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: names
                .into_iter()
                .map(|name| (name.into(), Value::Null))
                .collect(),
        }
    }

    /// Parse a JSON object. Key order follows the document.
    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        // Non-object documents fail here with "expected a map"
        let categories: IndexMap<String, Value> =
            serde_json::from_str(contents).map_err(|e| CatalogError::Invalid(e.to_string()))?;

        Ok(Self { categories })
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_json_str(&contents)
    }

    /// Load the catalog, degrading to an empty one on any failure
    ///
    /// A missing catalog only empties the menu; it never stops the server.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    tracing::warn!(path = %path.display(), "{}", MenuError::MissingCatalog);
                } else {
                    tracing::info!(
                        path = %path.display(),
                        categories = catalog.len(),
                        "Catalog loaded"
                    );
                }
                catalog
            }
            Err(e) => {
                tracing::warn!(error = %e, "{}, serving an empty menu", MenuError::MissingCatalog);
                Self::default()
            }
        }
    }

    /// Category names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.categories.keys().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_json_preserves_document_order() {
        let catalog =
            Catalog::from_json_str(r#"{"Sneakers": [], "Boots": [{"sku": 1}], "Sandals": {}}"#)
                .unwrap();

        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Sneakers", "Boots", "Sandals"]);
        assert_eq!(catalog.first(), Some("Sneakers"));
    }

    #[test]
    fn test_from_json_does_not_sort_keys() {
        let catalog = Catalog::from_json_str(r#"{"Zebra": 1, "Apple": 2, "Mango": 3}"#).unwrap();

        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Catalog::from_json_str(r#"["Sneakers", "Boots"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_empty_object_is_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.first(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Boots": [], "Sneakers": []}}"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Boots", "Sneakers"]);
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load_or_empty(&dir.path().join("missing.json"));
        assert!(catalog.is_empty());

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "42").unwrap();
        assert!(Catalog::load_or_empty(bad.path()).is_empty());
    }

    #[test]
    fn test_from_names() {
        let catalog = Catalog::from_names(["Sneakers", "Boots"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Sneakers", "Boots"]);
    }
}
