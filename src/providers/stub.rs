//! Scripted provider for tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::conversation::Message;

use super::{CompletionParams, CompletionProvider, ProviderError};

/// Answers every call with the same scripted outcome and records each prompt
pub struct StubProvider {
    outcome: Result<String, String>,
    calls: Mutex<Vec<(Vec<Message>, CompletionParams)>>,
}

impl StubProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            outcome: Ok(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<Message>, CompletionParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), params.clone()));

        match &self.outcome {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(ProviderError::InvalidResponse(message.clone())),
        }
    }
}
