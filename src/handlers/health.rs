//! Liveness and discovery endpoints. Neither touches the store.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "medicine-inventory-backend",
    })
}

/// GET / - lists the available endpoints
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Medicine Inventory API",
        "endpoints": {
            "health": "/health",
            "medicines": "/api/medicines",
            "medicine_by_id": "/api/medicines/{id}"
        }
    }))
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
