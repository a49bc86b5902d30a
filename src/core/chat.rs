//! Chat turn handling
//!
//! The ChatEngine takes one user message plus the transcript the client has
//! been carrying, asks the provider for a reply, and hands back the reply
//! together with the transcript extended by that exchange. Nothing is kept
//! between calls.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::CompletionSettings;
use crate::conversation::{Message, Transcript};
use crate::providers::{CompletionProvider, ProviderError};

/// One inbound chat turn
#[derive(Debug, Clone)]
pub struct ChatTurnRequest {
    /// The user's new message
    pub message: String,

    /// Everything exchanged so far, oldest first
    pub history: Transcript,
}

/// Result of a chat turn
#[derive(Debug, Clone)]
pub struct ChatTurnResponse {
    /// The assistant's reply
    pub reply: String,

    /// The request history followed by the new user and assistant messages
    pub history: Transcript,
}

/// Errors from the chat engine
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("Error processing chat request: {0}")]
    Provider(#[from] ProviderError),
}

/// The core chat engine
pub struct ChatEngine {
    provider: Option<Arc<dyn CompletionProvider>>,
    settings: CompletionSettings,
}

impl ChatEngine {
    /// Create a new chat engine. `None` means no provider credential was
    /// configured and every turn will be refused.
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    /// Process a chat turn and return the reply with the extended transcript
    pub async fn handle(&self, request: ChatTurnRequest) -> Result<ChatTurnResponse, ChatError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            ChatError::ServiceUnavailable(
                "OpenAI API key not configured. Please set OPENAI_API_KEY environment variable."
                    .to_string(),
            )
        })?;

        let turn_id = Uuid::new_v4();
        info!(
            %turn_id,
            provider = provider.name(),
            history_len = request.history.len(),
            "Handling chat turn"
        );

        let prompt = self.build_prompt(&request);
        let reply = provider
            .complete(&prompt, &self.settings.params())
            .await
            .map_err(|e| {
                warn!(%turn_id, error = %e, "Completion failed");
                e
            })?;

        debug!(%turn_id, reply_len = reply.len(), "Completion received");

        let ChatTurnRequest { message, mut history } = request;
        history.push_exchange(message, reply.clone());

        Ok(ChatTurnResponse { reply, history })
    }

    /// System instruction, then prior turns, then the new user message
    fn build_prompt(&self, request: &ChatTurnRequest) -> Vec<Message> {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(Message::system(self.settings.system_prompt.as_str()));
        messages.extend(request.history.messages().iter().cloned());
        messages.push(Message::user(request.message.as_str()));
        messages
    }
}
