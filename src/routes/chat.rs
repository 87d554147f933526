use axum::Json;

use crate::{
    message::{ChatReply, ChatRequest},
    services::reply::generate_reply,
};

/// `POST /api/chat`. Malformed bodies are rejected by the `Json` extractor
/// before this runs, so the handler itself cannot fail.
pub async fn chat_handler(Json(payload): Json<ChatRequest>) -> Json<ChatReply> {
    Json(ChatReply {
        reply: generate_reply(&payload.message),
    })
}
