use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kural_core::CoreError;
use kural_schema::{ConversationEntry, Kural};

use crate::error::ApiError;
use crate::state::AppState;

/// Chat request. Clients may also send a `history` list; it is accepted
/// and ignored (unknown fields are skipped during deserialization).
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub kural: Kural,
    pub follow_up: String,
    pub conversation_entry: ConversationEntry,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(CoreError::InvalidInput("message cannot be empty".to_string()).into());
    }

    let classification = state.classifier.classify(&body.message);
    debug!(?classification, "chat message classified");

    let reply = state
        .composer
        .compose(classification, &mut rand::thread_rng());
    let entry = state
        .recorder
        .record(&body.message, &reply, Utc::now())
        .await?;

    Ok(Json(ChatResponse {
        response: reply.message,
        kural: reply.kural,
        follow_up: reply.follow_up,
        conversation_entry: entry,
    }))
}
