//! Admin search-select (typeahead) handlers.
//!
//! Each endpoint accepts a form-encoded partial search term and returns a
//! JSON array of `{label, value}` pairs for the requesting widget. The
//! `default` endpoint routes on the widget's field name for pages that bind
//! a generic select control.

use axum::Form;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;

use crate::select::EntityKind;
use crate::state::AppState;
use crate::web::error::{ApiError, catalog_error};
use crate::web::routes::{cache, with_cache_control};

/// The admin area shows unpublished records in every dropdown.
const INCLUDE_HIDDEN: bool = true;

#[derive(Debug, Deserialize)]
pub struct SearchSelectParams {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct DefaultSearchParams {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub field_name: String,
}

/// `POST /api/admin/search-select/categories`
pub(super) async fn categories(
    State(state): State<AppState>,
    Form(params): Form<SearchSelectParams>,
) -> Result<Response, ApiError> {
    let items = state
        .select_lists
        .search(EntityKind::Category, &params.search_term, INCLUDE_HIDDEN)
        .await
        .map_err(|e| catalog_error("Category search", e))?;
    Ok(with_cache_control(items, cache::ADMIN))
}

/// `POST /api/admin/search-select/manufacturers`
pub(super) async fn manufacturers(
    State(state): State<AppState>,
    Form(params): Form<SearchSelectParams>,
) -> Result<Response, ApiError> {
    let items = state
        .select_lists
        .search(
            EntityKind::Manufacturer,
            &params.search_term,
            INCLUDE_HIDDEN,
        )
        .await
        .map_err(|e| catalog_error("Manufacturer search", e))?;
    Ok(with_cache_control(items, cache::ADMIN))
}

/// `POST /api/admin/search-select/vendors`
pub(super) async fn vendors(
    State(state): State<AppState>,
    Form(params): Form<SearchSelectParams>,
) -> Result<Response, ApiError> {
    let items = state
        .select_lists
        .search(EntityKind::Vendor, &params.search_term, INCLUDE_HIDDEN)
        .await
        .map_err(|e| catalog_error("Vendor search", e))?;
    Ok(with_cache_control(items, cache::ADMIN))
}

/// `POST /api/admin/search-select/default`
///
/// Field-name dispatch for pages that wire up a generic select widget.
/// Unknown field names get a placeholder-only list rather than an error.
pub(super) async fn default_search(
    State(state): State<AppState>,
    Form(params): Form<DefaultSearchParams>,
) -> Result<Response, ApiError> {
    let Some(kind) = kind_for_field(&params.field_name) else {
        return Ok(with_cache_control(
            state.select_lists.placeholder_only(),
            cache::ADMIN,
        ));
    };

    let items = state
        .select_lists
        .search(kind, &params.search_term, INCLUDE_HIDDEN)
        .await
        .map_err(|e| catalog_error("Select search", e))?;
    Ok(with_cache_control(items, cache::ADMIN))
}

/// Case-insensitive substring dispatch on the widget's field name, in
/// priority order category > manufacturer > vendor. Substring matching keeps
/// compatibility with existing admin pages; names containing several entity
/// words resolve to the highest-priority one.
fn kind_for_field(field_name: &str) -> Option<EntityKind> {
    let name = field_name.to_lowercase();
    if name.contains("category") {
        Some(EntityKind::Category)
    } else if name.contains("manufacturer") {
        Some(EntityKind::Manufacturer)
    } else if name.contains("vendor") {
        Some(EntityKind::Vendor)
    } else {
        None
    }
}
