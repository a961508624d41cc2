// src/routes/mod.rs
pub mod chat;
pub mod contact;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/chat",
            post(chat::chat_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/contact",
            post(contact::contact_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

// Bare OPTIONS (no CORS preflight headers) still gets a clean 200.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
