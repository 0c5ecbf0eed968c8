use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GenerationError;
use super::message::Message;
use super::model::{ChatModel, TokenStream, with_stall_timeout};
use super::ndjson;
use crate::constants::{
    DEFAULT_GENERATION_TIMEOUT_SECS, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL,
    GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE, OLLAMA_NUM_CTX,
};

#[derive(Debug, Serialize)]
struct ChatReq<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    options: ChatOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ChatOptions {
    temperature: f32,
    num_ctx: u32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResp {
    #[serde(default)]
    message: Option<ChatRespMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatRespMessage {
    #[serde(default)]
    content: String,
}

/// Chat model served by a local Ollama instance (`POST {base_url}/api/chat`).
#[derive(Debug, Clone)]
pub struct OllamaChatModel {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaChatModel {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|source| GenerationError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
        })
    }

    /// `llama3` at `http://localhost:11434` with a 45 s timeout.
    pub fn with_defaults() -> Result<Self, GenerationError> {
        Self::new(
            DEFAULT_OLLAMA_URL,
            DEFAULT_OLLAMA_MODEL,
            Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    fn options() -> ChatOptions {
        ChatOptions {
            temperature: GENERATION_TEMPERATURE,
            num_ctx: OLLAMA_NUM_CTX,
            num_predict: GENERATION_MAX_TOKENS,
        }
    }

    async fn send(
        &self,
        messages: &[Message],
        stream: bool,
    ) -> Result<reqwest::Response, GenerationError> {
        let endpoint = self.endpoint();
        let mut request = self.client.post(&endpoint).json(&ChatReq {
            model: &self.model,
            messages,
            stream,
            options: Self::options(),
        });
        if !stream {
            request = request.timeout(self.timeout);
        }

        let response = request.send().await.map_err(|source| {
            if source.is_timeout() {
                GenerationError::Timeout {
                    secs: self.timeout.as_secs(),
                }
            } else {
                GenerationError::Http {
                    endpoint: endpoint.clone(),
                    source,
                }
            }
        })?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                endpoint,
                status,
                body: body.trim().to_string(),
            });
        }

        Ok(response)
    }
}

impl ChatModel for OllamaChatModel {
    async fn generate(&self, messages: &[Message]) -> Result<String, GenerationError> {
        debug!(
            model = %self.model,
            num_messages = messages.len(),
            "Ollama chat request"
        );

        let response = self.send(messages, false).await?;
        let parsed = response
            .json::<ChatResp>()
            .await
            .map_err(|e| GenerationError::Decode {
                message: e.to_string(),
            })?;

        Ok(parsed.message.map(|m| m.content).unwrap_or_default())
    }

    async fn stream(&self, messages: &[Message]) -> Result<TokenStream, GenerationError> {
        debug!(
            model = %self.model,
            num_messages = messages.len(),
            "Ollama chat stream"
        );

        let response = self.send(messages, true).await?;
        let endpoint = self.endpoint();
        let chunks = Box::pin(response.bytes_stream().map(move |chunk| {
            chunk.map_err(|source| GenerationError::Http {
                endpoint: endpoint.clone(),
                source,
            })
        }));

        // The request timeout covers the whole body; streams only bound the gap between reads.
        Ok(ndjson::token_stream(with_stall_timeout(chunks, self.timeout)))
    }
}
