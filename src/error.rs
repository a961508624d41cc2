// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Request-level failures for both proxy endpoints. Provider detail stays in
/// the log; callers only ever see the fixed French message for each variant.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("upstream credential not configured")]
    Unconfigured,
    #[error("AI service returned an error")]
    Upstream,
    #[error("AI service returned no text")]
    EmptyResponse,
    #[error("email delivery failed")]
    Delivery,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(err) = &self {
            tracing::error!(error = ?err, "unhandled internal error");
        }

        let (status, message) = match &self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Méthode non autorisée"),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Unconfigured => (StatusCode::INTERNAL_SERVER_ERROR, "Service non configuré"),
            AppError::Upstream => (StatusCode::INTERNAL_SERVER_ERROR, "Erreur du service IA"),
            AppError::EmptyResponse => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Réponse vide du service IA")
            }
            AppError::Delivery => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erreur lors de l'envoi de l'email",
            ),
            AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erreur interne du serveur")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
