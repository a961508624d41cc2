//! Contact-form validation, the fixed notification email, and delivery via
//! the transactional email API.

use chrono::{DateTime, Local};

use crate::error::AppError;

const FROM_ADDRESS: &str = "Coach 3M <onboarding@resend.dev>";

/// A validated submission, alive for the duration of one request.
#[derive(Debug)]
pub struct ContactSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: Option<&'a str>,
    pub message: &'a str,
    pub submitted_at: DateTime<Local>,
}

/// Shape check only: `local@domain.tld`, no whitespace, exactly one `@`,
/// and a dot inside the domain with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn email_subject(subject: Option<&str>, name: &str) -> String {
    format!("[Coach 3M] {} - {}", subject.unwrap_or("Nouveau message"), name)
}

/// The fixed HTML notification body. Submitted values are embedded verbatim;
/// `white-space: pre-wrap` keeps the message's line breaks.
pub fn render_email_html(submission: &ContactSubmission<'_>) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #0A192F; border-bottom: 2px solid #C5A059; padding-bottom: 10px;">
    Nouveau message de contact
  </h2>
  <p><strong>Nom:</strong> {name}</p>
  <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
  <p><strong>Sujet:</strong> {subject}</p>
  <hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;" />
  <h3 style="color: #0A192F;">Message:</h3>
  <p style="background: #f5f5f5; padding: 15px; border-radius: 5px; white-space: pre-wrap;">{message}</p>
  <hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;" />
  <p style="color: #888; font-size: 12px;">
    Envoyé depuis le site Coach 3M le {date}
  </p>
</div>"#,
        name = submission.name,
        email = submission.email,
        subject = submission.subject.unwrap_or("Non spécifié"),
        message = submission.message,
        date = submission.submitted_at.format("%d/%m/%Y %H:%M:%S"),
    )
}

/// Submit the notification email. Single attempt; a provider failure is
/// logged in full and surfaced as a generic delivery error.
pub async fn deliver(
    client: &reqwest::Client,
    api_key: &str,
    api_url: &str,
    recipient: &str,
    submission: &ContactSubmission<'_>,
) -> Result<(), AppError> {
    let payload = serde_json::json!({
        "from": FROM_ADDRESS,
        "to": recipient,
        "subject": email_subject(submission.subject, submission.name),
        "html": render_email_html(submission),
    });

    let response = client
        .post(api_url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "resend request failed");
            AppError::Delivery
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        tracing::error!(%status, detail = %detail, "resend error");
        return Err(AppError::Delivery);
    }

    Ok(())
}
