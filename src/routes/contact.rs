use axum::Json;
use axum::extract::State;
use chrono::Local;

use crate::error::AppError;
use crate::message::{AppJson, ContactRequest, ContactResponse};
use crate::services::contact::{self, ContactSubmission};
use crate::state::SharedState;

pub async fn contact_handler(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let submitted_at = Local::now();

    let name = payload.name.as_deref().unwrap_or("");
    let email = payload.email.as_deref().unwrap_or("");
    let message = payload.message.as_deref().unwrap_or("");

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(AppError::BadRequest(
            "Tous les champs obligatoires doivent être remplis".to_string(),
        ));
    }
    if !contact::is_valid_email(email) {
        return Err(AppError::BadRequest("Email invalide".to_string()));
    }

    let subject = payload.subject.as_deref().filter(|s| !s.is_empty());
    let submission = ContactSubmission {
        name,
        email,
        subject,
        message,
        submitted_at,
    };

    match state.config.resend_api_key.as_deref() {
        Some(api_key) => {
            contact::deliver(
                &state.http,
                api_key,
                &state.config.resend_api_url,
                &state.config.contact_recipient,
                &submission,
            )
            .await?;
        }
        // No delivery credential: log the submission instead. Intentional
        // fallback for environments without email configured.
        None => {
            tracing::info!(
                name,
                email,
                subject = subject.unwrap_or(""),
                content = message,
                "contact form submission (email delivery not configured)"
            );
        }
    }

    Ok(Json(ContactResponse {
        success: true,
        message: "Votre message a été envoyé avec succès".to_string(),
    }))
}
