//! API error type shared by the web handlers.

use crate::catalog::CatalogError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    CatalogUnavailable,
}

/// A handler-level failure, serialized as `{"error": {"code", "message"}}`.
#[derive(Debug)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ApiErrorCode::CatalogUnavailable => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": { "code": self.code, "message": self.message }
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Log a catalog failure with its context and wrap it for the response.
/// Upstream failures are not retried here; the caller sees a 502.
pub fn catalog_error(context: &str, e: CatalogError) -> ApiError {
    error!(error = %e, "{context} failed");
    ApiError::new(ApiErrorCode::CatalogUnavailable, format!("{context} failed"))
}
