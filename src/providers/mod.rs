//! AI provider integrations

pub mod openai_compat;
#[cfg(test)]
pub mod stub;

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Message;

pub use openai_compat::{OpenAICompatConfig, OpenAICompatProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Parameters sent with every completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A text completion service that turns an ordered prompt into one reply
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Return the top completion text for `messages`.
    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<String, ProviderError>;
}
