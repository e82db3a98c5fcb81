//! Shared, read-only state for request handlers

use std::sync::Arc;

use axum::extract::{rejection::QueryRejection, Query};

use crate::catalog::Catalog;
use crate::config::{MenuConfig, SiteConfig};
use crate::menu::{MenuError, MenuQuery, Selector};

/// Shared state for the HTTP server
///
/// Everything here is immutable after startup, so handlers share it
/// through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Ordered category catalog, owned by whoever loaded it
    pub(crate) catalog: Arc<Catalog>,
    /// Current-section defaults
    pub(crate) menu: Arc<MenuConfig>,
    /// Page shell settings
    pub(crate) site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, menu: MenuConfig, site: SiteConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            menu: Arc::new(menu),
            site: Arc::new(site),
        }
    }

    /// Turn the extracted query into a selector
    ///
    /// A rejected query string is an `InvalidSelector`: logged, then
    /// treated as matching nothing. It never fails the request.
    pub(super) fn selector(&self, query: Result<Query<MenuQuery>, QueryRejection>) -> Selector {
        if self.catalog.is_empty() {
            tracing::debug!("{}", MenuError::MissingCatalog);
        }

        match query {
            Ok(Query(query)) => Selector::resolve(query.s, &self.menu, &self.catalog),
            Err(rejection) => {
                let error = MenuError::InvalidSelector(rejection.body_text());
                tracing::warn!("{}; no menu entry will be active", error);
                Selector::Unmatched
            }
        }
    }
}
