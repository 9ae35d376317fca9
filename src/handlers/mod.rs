use std::sync::Arc;

use axum::Router;
use sqlx::mysql::MySqlConnectOptions;

pub mod error;
pub mod health;
pub mod medicines;

pub use error::ApiError;

/// Shared application state: the store connection options. Connections
/// themselves are opened per request by the db layer.
#[derive(Clone)]
pub struct AppState {
    pub connect_options: MySqlConnectOptions,
}

/// Builds the complete route table.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(medicines::router())
}
