// Route handlers - header page, menu fragment, category listing

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    response::Html,
    Json,
};
use serde::Serialize;

use crate::menu::{MenuQuery, Selector};
use crate::render;

use super::error::ServerError;
use super::state::AppState;

/// GET / - full header page with the category menu
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Html<String> {
    let selector = state.selector(query);
    tracing::debug!(selector = ?selector, "Rendering header page");

    let menu = render::menu_for(&state.catalog, &selector);
    Html(render::page(&state.site, menu).into_string())
}

/// GET /partials/menu - only the `<li>` items, for embedding elsewhere
pub async fn menu_fragment(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Html<String> {
    let selector = state.selector(query);
    tracing::debug!(selector = ?selector, "Rendering menu fragment");

    Html(render::menu_for(&state.catalog, &selector).into_string())
}

/// Response for GET /api/categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// Category names in menu order
    pub categories: Vec<String>,
    /// Section active when no `s` is given (null if none)
    pub default_section: Option<String>,
}

/// GET /api/categories - catalog keys and the effective default section
pub async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let default_section = Selector::resolve(None, &state.menu, &state.catalog)
        .as_str()
        .map(str::to_string);

    Json(CategoriesResponse {
        categories: state.catalog.names().map(str::to_string).collect(),
        default_section,
    })
}

/// Fallback when no static directory is configured
pub(crate) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
