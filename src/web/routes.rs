//! Web router construction and shared response utilities.

use axum::{
    Router,
    http::HeaderValue,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use std::time::Duration;

use crate::state::AppState;
use crate::web::{search_select, status};
use tower_http::trace::TraceLayer;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Cache-Control presets.
pub mod cache {
    /// Admin endpoints -- never cache.
    pub const ADMIN: &str = "private, no-store, must-revalidate";
}

/// Wraps a JSON response with a `Cache-Control` header.
pub fn with_cache_control<T: serde::Serialize>(value: T, header: &'static str) -> Response {
    let mut response = Json(value).into_response();
    response.headers_mut().insert(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(header),
    );
    response
}

/// Creates the web server router
pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(status::health))
        .route(
            "/admin/search-select/categories",
            post(search_select::categories),
        )
        .route(
            "/admin/search-select/manufacturers",
            post(search_select::manufacturers),
        )
        .route(
            "/admin/search-select/vendors",
            post(search_select::vendors),
        )
        .route(
            "/admin/search-select/default",
            post(search_select::default_search),
        )
        .with_state(app_state);

    Router::new().nest("/api", api_router).layer((
        // Outermost: per-request span + response logging.
        TraceLayer::new_for_http(),
        // Compress API responses (gzip/brotli/zstd).
        CompressionLayer::new()
            .zstd(true)
            .br(true)
            .gzip(true)
            .quality(tower_http::CompressionLevel::Fastest),
        TimeoutLayer::new(Duration::from_secs(30)),
    ))
}
