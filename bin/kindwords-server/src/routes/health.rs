//! Liveness endpoint backed by a real store round trip.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::error::ServerError;
use crate::schemas::api::chat::ErrorBody;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health), components(schemas(HealthResponse)))]
pub struct HealthApi;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the response is 200.
    pub status: String,
    /// `"ok"` once a connection was opened and the `messages` table answered.
    pub database: String,
    pub version: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Opens a store connection per call, the same way chat requests do, so a
/// missing or unreadable database file shows up here as a 503.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server and database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = ErrorBody),
    )
)]
pub async fn get_health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ServerError> {
    state.store.ping().await.map_err(ServerError::StoreUnavailable)?;
    Ok(Json(HealthResponse {
        status: "ok".into(),
        database: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    }))
}
