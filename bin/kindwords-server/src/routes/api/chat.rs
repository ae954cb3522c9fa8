//! Chat endpoints: send a message, read the history, wipe it.
//!
//! `POST /api/message` stores the user's text, asks the responder for a reply,
//! stores that too and returns it.  Message text never reaches the logs; only
//! its length and the matched category do.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::entities::{MessageStore, Role};
use crate::error::ServerError;
use crate::schemas::api::chat::{
    ErrorBody, HistoryMessage, HistoryResponse, MessageReply, MessageRequest, ResetResponse,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_history, reset, post_message),
    components(schemas(
        MessageRequest,
        MessageReply,
        HistoryMessage,
        HistoryResponse,
        ResetResponse,
        ErrorBody
    ))
)]
pub struct ChatApi;

/// Register chat routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/history", get(get_history))
        .route("/reset", post(reset))
        .route("/message", post(post_message))
}

#[utoipa::path(
    get,
    path = "/api/history",
    tag = "chat",
    responses(
        (status = 200, description = "Most recent messages, oldest first", body = HistoryResponse),
        (status = 500, description = "Storage error", body = ErrorBody),
    )
)]
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HistoryResponse>, ServerError> {
    let messages = state.store.history().await?;
    Ok(Json(HistoryResponse {
        messages: messages.iter().map(|m| m.to_response()).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/reset",
    tag = "chat",
    responses(
        (status = 200, description = "Conversation cleared", body = ResetResponse),
        (status = 500, description = "Storage error", body = ErrorBody),
    )
)]
pub async fn reset(State(state): State<Arc<AppState>>) -> Result<Json<ResetResponse>, ServerError> {
    let removed = state.store.clear().await?;
    info!(removed, "conversation cleared");
    Ok(Json(ResetResponse { ok: true }))
}

/// Unreadable bodies (bad JSON, wrong content type, non-object) are treated as
/// an empty request and rejected with the same 400 as blank text.
#[utoipa::path(
    post,
    path = "/api/message",
    tag = "chat",
    request_body = MessageRequest,
    responses(
        (status = 200, description = "Reply generated", body = MessageReply),
        (status = 400, description = "Text missing or blank", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody),
    )
)]
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<MessageReply>, ServerError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "unreadable message body; treating as empty");
            MessageRequest::default()
        }
    };

    let text = req.text.as_deref().unwrap_or_default().trim();
    if text.is_empty() {
        return Err(ServerError::BadRequest("text is required".into()));
    }

    state.store.append(Role::User, text).await?;

    let category = kindwords_responder::classify(text);
    let reply = category.reply();
    info!(%category, chars = text.chars().count(), "reply selected");

    state.store.append(Role::Assistant, &reply).await?;
    Ok(Json(MessageReply { reply }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
