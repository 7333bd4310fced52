//! Health handler.

use axum::response::Json;
use serde_json::{Value, json};

/// `GET /api/health`
pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "commit": env!("GIT_COMMIT_SHORT"),
    }))
}
