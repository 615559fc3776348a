//! Roast Requester: one chat-completion call to Mistral per user action.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::encode::EncodedImage;
use crate::prompts::{prompt_for, RoastStyle};

/// Hosted inference endpoint, version segment included.
pub const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1";
/// Multimodal model used for every roast.
pub const ROAST_MODEL: &str = "pixtral-12b-2409";

/// Cap on response bodies carried inside error values.
const BODY_SNIPPET_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("could not reach the inference API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("inference API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not decode the inference response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("inference response contained no text")]
    EmptyCompletion,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the Mistral chat-completions API.
#[derive(Clone)]
pub struct MistralClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl Default for MistralClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MistralClient {
    pub fn new() -> Self {
        Self::with_base_url(MISTRAL_API_URL)
    }

    /// Client against a different endpoint; tests point this at a stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: ROAST_MODEL.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests one roast: a single user message carrying the style prompt and
    /// the image as a data URI. One attempt per call, no retry, no backoff;
    /// reqwest's default timeouts apply.
    pub async fn request_roast(
        &self,
        api_key: &str,
        image: &EncodedImage,
        style: RoastStyle,
    ) -> Result<String, InferenceError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let payload = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt_for(style) },
                    { "type": "image_url", "image_url": image.to_data_uri() },
                ]
            }]
        });

        debug!(%style, model = %self.model, mime = image.mime(), "sending roast request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(InferenceError::Api {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(InferenceError::EmptyCompletion)
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}
