// src/routes/mod.rs
pub mod chat;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use chat::chat_handler;

pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

/// Methods and headers are mirrored from the request rather than wildcarded,
/// which the credentialed policy requires.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "osky-backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
