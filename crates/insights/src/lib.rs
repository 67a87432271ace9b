//! Client for the generative-text collaborator behind the insights
//! feature.
//!
//! The feature is a single prompt-in/text-out call; everything about the
//! prompt is assembled elsewhere. [`InsightsBackend`] is the seam the API
//! layer consumes; [`ChatCompletionsBackend`] is the production
//! implementation speaking the OpenAI-compatible chat-completions
//! protocol (works with OpenAI, vLLM, Ollama, and other compatible
//! servers).

mod chat;

use async_trait::async_trait;

pub use chat::ChatCompletionsBackend;

/// Errors from the generative backend.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    /// The HTTP request itself failed (network, DNS, TLS).
    #[error("insights request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("insights backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered 2xx but without a usable completion.
    #[error("unexpected insights response: {0}")]
    Decode(String),
}

/// A text-generation backend able to answer a single prompt.
#[async_trait]
pub trait InsightsBackend: Send + Sync {
    /// Generate the insights text for an assembled prompt.
    async fn generate(&self, prompt: &str) -> Result<String, InsightsError>;
}
