pub mod chat;

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use crate::state::AppState;

/// Routes nested under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(chat::router())
}

pub fn api_docs() -> utoipa::openapi::OpenApi {
    chat::ChatApi::openapi()
}
