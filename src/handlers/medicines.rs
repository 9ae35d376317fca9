//! Medicine endpoints: list, fetch by id, create.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::error::ApiError;
use super::AppState;
use crate::db;
use crate::db::models::{Medicine, NewMedicine};

/// GET /api/medicines - every medicine, ordered by ascending id
async fn list_medicines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Medicine>>, ApiError> {
    let medicines = db::list_medicines(&state.connect_options).await?;
    Ok(Json(medicines))
}

/// GET /api/medicines/{id} - a single medicine
async fn get_medicine(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Medicine>, ApiError> {
    let medicine = db::get_medicine(&state.connect_options, id).await?;
    Ok(Json(medicine))
}

/// POST /api/medicines - insert a medicine, respond with the stored row
///
/// Missing or mistyped fields never reach this handler: the Json extractor
/// rejects them. The remaining check is the non-empty name, which runs
/// before any store access.
async fn create_medicine(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewMedicine>,
) -> Result<(StatusCode, Json<Medicine>), ApiError> {
    new.validate()?;
    let medicine = db::insert_medicine(&state.connect_options, &new).await?;
    Ok((StatusCode::CREATED, Json(medicine)))
}

/// Medicine routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/medicines", get(list_medicines).post(create_medicine))
        .route("/api/medicines/{id}", get(get_medicine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use sqlx::mysql::MySqlConnectOptions;

    #[tokio::test]
    async fn create_rejects_empty_name_before_store_access() {
        // The host is never resolved: validation fails before any connect.
        let state = Arc::new(AppState {
            connect_options: MySqlConnectOptions::new().host("store.invalid"),
        });
        let new = NewMedicine {
            name: String::new(),
            quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            category: "painkiller".to_string(),
        };

        let err = create_medicine(State(state), Json(new))
            .await
            .err()
            .expect("empty name must fail");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
