//! Conversation assembly and the single-shot call to the generative-language
//! API. No retries, no streaming; one request per chat turn.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::message::{ChatMessage, ChatRole};

/// Persona preamble sent as the first turn of every conversation.
pub const SYSTEM_INSTRUCTION: &str = "Tu es l'assistant digital de Coach 3M (Moustapha Mahamat Moustapha). \n\
Ton ton est inspirant, direct, structuré et bienveillant. \n\
Tu es un expert en entrepreneuriat au Tchad, leadership et stratégie business. \n\
Tes réponses doivent être concises et motiver l'utilisateur à l'action. \n\
Utilise des expressions comme \"L'excellence est un choix\" ou \"Passez à l'action\".\n\
Réponds toujours en français.";

/// Fixed model acknowledgment completing the two-turn preamble.
pub const PREAMBLE_ACK: &str =
    "Compris. Je suis l'assistant digital de Coach 3M, prêt à inspirer et guider.";

const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user",
            parts: vec![Part { text: text.into() }],
        }
    }

    fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model",
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Build the upstream turn sequence: fixed two-turn preamble, then the
/// caller's history with `assistant` remapped to `model`, then the new
/// message as a final user turn.
pub fn build_conversation(history: &[ChatMessage], user_message: &str) -> Vec<Content> {
    let mut contents = Vec::with_capacity(history.len() + 3);
    contents.push(Content::user(SYSTEM_INSTRUCTION));
    contents.push(Content::model(PREAMBLE_ACK));
    for turn in history {
        contents.push(match turn.role {
            ChatRole::User => Content::user(turn.content.clone()),
            ChatRole::Assistant => Content::model(turn.content.clone()),
        });
    }
    contents.push(Content::user(user_message));
    contents
}

/// One attempt against the completion endpoint; the upstream's own error body
/// is logged but never relayed to the caller.
pub async fn generate_reply(
    client: &reqwest::Client,
    api_key: &str,
    api_url: &str,
    contents: Vec<Content>,
) -> Result<String, AppError> {
    let request = GenerateRequest {
        contents,
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    };

    let response = client
        .post(api_url)
        .query(&[("key", api_key)])
        .json(&request)
        .send()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "gemini request failed");
            AppError::Upstream
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        tracing::error!(%status, detail = %detail, "gemini api error");
        return Err(AppError::Upstream);
    }

    let data: GenerateResponse = response
        .json()
        .await
        .map_err(|err| AppError::Internal(err.into()))?;

    data.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|text| !text.is_empty())
        .ok_or(AppError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_yields_preamble_plus_one_turn() {
        let contents = build_conversation(&[], "Comment démarrer ?");
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[0].parts[0].text, SYSTEM_INSTRUCTION);
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[1].parts[0].text, PREAMBLE_ACK);
        assert_eq!(contents[2].role, "user");
        assert_eq!(contents[2].parts[0].text, "Comment démarrer ?");
    }

    #[test]
    fn history_roles_are_remapped() {
        let history = vec![
            ChatMessage {
                role: ChatRole::User,
                content: "Bonjour".to_string(),
            },
            ChatMessage {
                role: ChatRole::Assistant,
                content: "Bonjour, passez à l'action !".to_string(),
            },
        ];
        let contents = build_conversation(&history, "Et ensuite ?");
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[2].role, "user");
        assert_eq!(contents[3].role, "model");
        assert_eq!(contents[3].parts[0].text, "Bonjour, passez à l'action !");
        assert_eq!(contents[4].role, "user");
        assert_eq!(contents[4].parts[0].text, "Et ensuite ?");
    }

    #[test]
    fn generation_config_uses_wire_names() {
        let request = GenerateRequest {
            contents: build_conversation(&[], "test"),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["temperature"], 0.7);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
        assert!(value["contents"].is_array());
    }

    #[test]
    fn response_without_candidates_parses() {
        let data: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(data.candidates.is_empty());
    }
}
