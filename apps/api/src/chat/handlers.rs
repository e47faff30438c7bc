use axum::Json;
use serde::{Deserialize, Serialize};

use crate::chat;
use crate::errors::AppError;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// GET /api/v1/chat — the widget's opening message.
pub async fn handle_greeting() -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: chat::GREETING.to_string(),
    })
}

/// POST /api/v1/chat
pub async fn handle_chat(Json(req): Json<ChatRequest>) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message is empty".to_string()));
    }
    Ok(Json(ChatResponse {
        reply: chat::reply(message).to_string(),
    }))
}
