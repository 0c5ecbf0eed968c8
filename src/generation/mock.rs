use futures_util::stream::{self, StreamExt};
use parking_lot::Mutex;

use super::error::GenerationError;
use super::message::Message;
use super::model::{ChatModel, TokenStream};

/// Scripted chat model that records every message list it receives.
#[derive(Debug, Default)]
pub struct MockChatModel {
    reply: String,
    tokens: Vec<String>,
    fail_with: Option<String>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockChatModel {
    /// Answers `reply` from `generate` and streams it as a single token.
    pub fn new(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self {
            tokens: vec![reply.clone()],
            reply,
            ..Default::default()
        }
    }

    /// Streams `tokens` in order; `generate` returns their concatenation.
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        Self {
            reply: tokens.concat(),
            tokens,
            ..Default::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, messages: &[Message]) -> Result<(), GenerationError> {
        self.calls.lock().push(messages.to_vec());
        match &self.fail_with {
            Some(message) => Err(GenerationError::Status {
                endpoint: "mock".to_string(),
                status: 503,
                body: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl ChatModel for MockChatModel {
    async fn generate(&self, messages: &[Message]) -> Result<String, GenerationError> {
        self.record(messages)?;
        Ok(self.reply.clone())
    }

    async fn stream(&self, messages: &[Message]) -> Result<TokenStream, GenerationError> {
        self.record(messages)?;
        let tokens: Vec<Result<String, GenerationError>> =
            self.tokens.iter().cloned().map(Ok).collect();
        Ok(stream::iter(tokens).boxed())
    }
}
