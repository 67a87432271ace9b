//! OpenAI-compatible chat-completions implementation of
//! [`InsightsBackend`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{InsightsBackend, InsightsError};

/// Sampling temperature for insights generation.
const TEMPERATURE: f32 = 0.7;

/// Generative backend speaking the `/chat/completions` protocol.
pub struct ChatCompletionsBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

/// Chat-completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat-completions response body (only the fields we read).
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
    content: Option<String>,
}

impl ChatCompletionsBackend {
    /// Create a backend for the given API base URL
    /// (e.g. `https://api.openai.com/v1`) and model name.
    pub fn new(base_url: &str, model: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl InsightsBackend for ChatCompletionsBackend {
    async fn generate(&self, prompt: &str) -> Result<String, InsightsError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let mut request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(InsightsError::Api { status, message });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| InsightsError::Decode(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| InsightsError::Decode("completion contained no text".into()))
    }
}
