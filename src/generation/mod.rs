//! Chat model backends used to turn an assembled context into an answer.
//!
//! Two backends are provided: a local Ollama server ([`OllamaChatModel`]) and a hosted
//! OpenAI model through `genai` ([`OpenAiChatModel`]). [`ChatBackend`] picks one at runtime.

pub mod backend;
pub mod error;
pub mod message;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod ndjson;
pub mod ollama;
pub mod openai;


pub use backend::ChatBackend;
pub use error::GenerationError;
pub use message::{Message, Role};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockChatModel;
pub use model::{ChatModel, SingleShot, TokenStream, with_stall_timeout};
pub use ollama::OllamaChatModel;
pub use openai::{OpenAiChatModel, api_key_from_env};
