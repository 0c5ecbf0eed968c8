use std::env;
use std::time::Duration;

use futures_util::StreamExt;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ChatStreamEvent};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};
use tracing::debug;

use super::error::GenerationError;
use super::message::{Message, Role};
use super::model::{ChatModel, TokenStream, with_stall_timeout};
use crate::constants::{
    DEFAULT_GENERATION_TIMEOUT_SECS, GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE,
};

const ENV_API_GPT: &str = "API_GPT";
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Reads the hosted model key from `API_GPT`, then `OPENAI_API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    [ENV_API_GPT, ENV_OPENAI_API_KEY]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

/// Hosted OpenAI chat model, called through `genai`.
#[derive(Clone)]
pub struct OpenAiChatModel {
    client: Client,
    model: String,
    options: ChatOptions,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiChatModel")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiChatModel {
    /// Builds the model with the key from [`api_key_from_env`].
    pub fn from_env(model: impl Into<String>) -> Result<Self, GenerationError> {
        let api_key = api_key_from_env().ok_or(GenerationError::MissingApiKey)?;
        Ok(Self::with_api_key(model, api_key))
    }

    pub fn with_api_key(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );
        let client = Client::builder().with_auth_resolver(auth_resolver).build();

        Self {
            client,
            model: model.into(),
            options: ChatOptions::default()
                .with_temperature(f64::from(GENERATION_TEMPERATURE))
                .with_max_tokens(GENERATION_MAX_TOKENS),
            timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn timeout_error(&self) -> GenerationError {
        GenerationError::Timeout {
            secs: self.timeout.as_secs(),
        }
    }
}

pub(crate) fn to_chat_request(messages: &[Message]) -> ChatRequest {
    let messages: Vec<ChatMessage> = messages
        .iter()
        .map(|m| match m.role {
            Role::System => ChatMessage::system(m.content.clone()),
            Role::User => ChatMessage::user(m.content.clone()),
            Role::Assistant => ChatMessage::assistant(m.content.clone()),
        })
        .collect();

    ChatRequest::new(messages)
}

impl ChatModel for OpenAiChatModel {
    async fn generate(&self, messages: &[Message]) -> Result<String, GenerationError> {
        debug!(
            model = %self.model,
            num_messages = messages.len(),
            "Hosted chat request"
        );

        let request = to_chat_request(messages);
        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat(&self.model, request, Some(&self.options)),
        )
        .await
        .map_err(|_| self.timeout_error())??;

        Ok(response.first_text().unwrap_or_default().to_string())
    }

    async fn stream(&self, messages: &[Message]) -> Result<TokenStream, GenerationError> {
        debug!(
            model = %self.model,
            num_messages = messages.len(),
            "Hosted chat stream"
        );

        let request = to_chat_request(messages);
        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat_stream(&self.model, request, Some(&self.options)),
        )
        .await
        .map_err(|_| self.timeout_error())??;

        let tokens = response.stream.filter_map(|event| async move {
            match event {
                Ok(ChatStreamEvent::Chunk(chunk)) if !chunk.content.is_empty() => {
                    Some(Ok(chunk.content))
                }
                Ok(_) => None,
                Err(e) => Some(Err(GenerationError::from(e))),
            }
        });

        Ok(with_stall_timeout(Box::pin(tokens), self.timeout))
    }
}
