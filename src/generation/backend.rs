use tracing::info;

use super::error::GenerationError;
use super::message::Message;
use super::model::{ChatModel, TokenStream};
use super::ollama::OllamaChatModel;
use super::openai::OpenAiChatModel;
use crate::config::Config;

/// Runtime choice between the local and the hosted model.
#[derive(Debug, Clone)]
pub enum ChatBackend {
    Ollama(OllamaChatModel),
    OpenAi(OpenAiChatModel),
}

impl ChatBackend {
    /// `model_type` "openai" selects the hosted model; anything else selects Ollama.
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        if config.uses_openai() {
            info!(model = %config.openai_model, "Using hosted chat model");
            let model = OpenAiChatModel::from_env(config.openai_model.clone())?
                .with_timeout(config.generation_timeout);
            return Ok(Self::OpenAi(model));
        }

        info!(
            model = %config.ollama_model,
            url = %config.ollama_url,
            "Using local chat model"
        );
        let model = OllamaChatModel::new(
            config.ollama_url.clone(),
            config.ollama_model.clone(),
            config.generation_timeout,
        )?;
        Ok(Self::Ollama(model))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ollama(_) => "ollama",
            Self::OpenAi(_) => "openai",
        }
    }
}

impl ChatModel for ChatBackend {
    async fn generate(&self, messages: &[Message]) -> Result<String, GenerationError> {
        match self {
            Self::Ollama(model) => model.generate(messages).await,
            Self::OpenAi(model) => model.generate(messages).await,
        }
    }

    async fn stream(&self, messages: &[Message]) -> Result<TokenStream, GenerationError> {
        match self {
            Self::Ollama(model) => model.stream(messages).await,
            Self::OpenAi(model) => model.stream(messages).await,
        }
    }
}
