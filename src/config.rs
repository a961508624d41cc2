// src/config.rs
use std::env;

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_CONTACT_RECIPIENT: &str = "mmmotivation03@gmail.com";

/// Process configuration, read from the environment once at startup and
/// carried in [`crate::state::AppState`] rather than referenced globally.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the generative-language API. When absent the chat
    /// endpoint answers "Service non configuré" without calling upstream.
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    /// Credential for the transactional email API. When absent the contact
    /// endpoint logs submissions instead of delivering them.
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub contact_recipient: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: non_empty(env::var("GEMINI_API_KEY").ok()),
            gemini_api_url: non_empty(env::var("GEMINI_API_URL").ok())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            resend_api_key: non_empty(env::var("RESEND_API_KEY").ok()),
            resend_api_url: non_empty(env::var("RESEND_API_URL").ok())
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            contact_recipient: non_empty(env::var("CONTACT_RECIPIENT").ok())
                .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

}

/// No credentials configured, provider defaults everywhere else.
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            resend_api_key: None,
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
            port: 3000,
        }
    }
}

// An empty env var counts as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
