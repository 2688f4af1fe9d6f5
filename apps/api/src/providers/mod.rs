//! Generation providers — the single point of entry for all outbound AI calls.
//!
//! ARCHITECTURAL RULE: no other module may call a generation vendor directly.
//! Handlers and the orchestrator see only the `TextGenerator` and
//! `ImageGenerator` capability traits; the production implementation is
//! `OpenAiClient`, which backs both.
//!
//! No retry logic lives here. A provider failure is surfaced immediately and
//! the caller (the admin UI) decides whether to try again.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const IMAGE_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

/// The model used for all text generation.
/// Intentionally hardcoded to prevent accidental drift.
pub const TEXT_MODEL: &str = "gpt-4o-mini";
/// The model used for featured-image generation.
pub const IMAGE_MODEL: &str = "dall-e-3";
/// Every generated image is requested at this fixed resolution.
pub const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no completion choices")]
    EmptyCompletion,

    #[error("provider returned no image")]
    EmptyImage,
}

/// Text generation capability: one prompt in, one completion body out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;
}

/// Image generation capability: one prompt in, one hosted image URL out.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The OpenAI client used for both text and image generation.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Reads an error message out of a non-2xx response body, falling back to
    /// the raw text when it is not the standard OpenAI error envelope.
    async fn api_error(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<OpenAiError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        ProviderError::Api { status, message }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let request_body = ChatRequest {
            model: TEXT_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(ProviderError::EmptyCompletion)?;

        debug!("Chat completion received ({} bytes)", content.len());
        Ok(content)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        let request_body = ImageRequest {
            model: IMAGE_MODEL,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
        };

        let response = self
            .client
            .post(IMAGE_GENERATIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let images: ImageResponse = response.json().await?;
        let url = images
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or(ProviderError::EmptyImage)?;

        debug!("Image generated: {url}");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_deserializes() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "EXCERPT:\nhello"}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "EXCERPT:\nhello");
    }

    #[test]
    fn test_chat_response_with_no_choices_is_empty() {
        let json = r#"{"choices": []}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_image_response_deserializes_url() {
        let json = r#"{"data": [{"url": "https://img.example.com/a.png"}]}"#;
        let parsed: ImageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.data[0].url.as_deref(),
            Some("https://img.example.com/a.png")
        );
    }

    #[test]
    fn test_image_response_tolerates_missing_url() {
        // b64_json responses omit the url field entirely
        let json = r#"{"data": [{}]}"#;
        let parsed: ImageResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.data[0].url.is_none());
    }

    #[test]
    fn test_openai_error_envelope_parses() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: OpenAiError = serde_json::from_str(json).unwrap();
        assert!(parsed.error.message.contains("Incorrect API key"));
    }
}
