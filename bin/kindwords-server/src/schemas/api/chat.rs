//! Request / response bodies for the `/api` chat endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::Message;

/// Request body for `POST /api/message`.
///
/// A missing `text` field is the same as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MessageRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Response body for `POST /api/message`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageReply {
    pub reply: String,
}

/// One entry of the history listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryMessage {
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
    /// ISO-8601 UTC timestamp as stored, e.g. `2026-10-16T09:30:12.123456Z`.
    pub ts: String,
}

/// Response body for `GET /api/history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Oldest first.
    pub messages: Vec<HistoryMessage>,
}

/// Response body for `POST /api/reset`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetResponse {
    pub ok: bool,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl Message {
    pub fn to_response(&self) -> HistoryMessage {
        HistoryMessage {
            role: self.role.to_string(),
            content: self.content.clone(),
            ts: self.ts.clone(),
        }
    }
}
