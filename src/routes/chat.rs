use axum::Json;
use axum::extract::State;

use crate::error::AppError;
use crate::message::{AppJson, ChatRequest, ChatResponse};
use crate::services::gemini;
use crate::state::SharedState;

pub async fn chat_handler(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(api_key) = state.config.gemini_api_key.as_deref() else {
        tracing::error!("GEMINI_API_KEY not configured");
        return Err(AppError::Unconfigured);
    };

    // `userMessage` must be a non-empty string; anything else is rejected
    // before the upstream call.
    let user_message = match payload.user_message.as_str() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AppError::BadRequest("Message requis".to_string())),
    };

    let contents = gemini::build_conversation(&payload.messages, user_message);
    let reply =
        gemini::generate_reply(&state.http, api_key, &state.config.gemini_api_url, contents)
            .await?;

    Ok(Json(ChatResponse { message: reply }))
}
