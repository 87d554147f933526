// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. Unknown extra fields are ignored.
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: String,
}
