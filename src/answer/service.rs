use futures_util::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::clean::clean_answer;
use super::error::ServiceError;
use super::events::StreamEvent;
use super::prompt::build_messages;
use crate::citation::{AssembledContext, Citation};
use crate::generation::{ChatModel, GenerationError, TokenStream};
use crate::pipeline::RetrievalPipeline;
use crate::retrieval::FragmentRetriever;

/// Final answer text with the citations it was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub citations: Vec<Citation>,
}

/// Answers legal questions from retrieved ruling fragments.
pub struct LegalRagService<R, M> {
    pipeline: RetrievalPipeline<R>,
    model: M,
}

impl<R, M> LegalRagService<R, M>
where
    R: FragmentRetriever,
    M: ChatModel,
{
    pub fn new(pipeline: RetrievalPipeline<R>, model: M) -> Self {
        Self { pipeline, model }
    }

    pub fn pipeline(&self) -> &RetrievalPipeline<R> {
        &self.pipeline
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Retrieves fragments and assembles the context and citations.
    pub async fn prepare(&self, question: &str) -> Result<AssembledContext, ServiceError> {
        let context = self.pipeline.run(question).await?;

        info!(num_citations = context.num_sources(), "Context prepared");
        Ok(context)
    }

    /// Generates a complete, cleaned answer.
    pub async fn answer(&self, question: &str) -> Result<Answer, ServiceError> {
        let context = self.prepare(question).await?;
        let messages = build_messages(question, &context.context_text, context.num_sources());

        let raw = self.model.generate(&messages).await?;

        Ok(Answer {
            text: clean_answer(&raw),
            citations: context.citations,
        })
    }

    /// Opens a token stream for the answer. Citations are known before the first token.
    ///
    /// Tokens are passed through as the model produces them, without cleanup.
    pub async fn stream_answer(
        &self,
        question: &str,
    ) -> Result<(TokenStream, Vec<Citation>), ServiceError> {
        let context = self.prepare(question).await?;
        let messages = build_messages(question, &context.context_text, context.num_sources());

        let tokens = self.model.stream(&messages).await?;
        Ok((tokens, context.citations))
    }

    /// [`stream_answer`](Self::stream_answer) as events: one `Citations` event, then one
    /// `Token` event per token.
    pub async fn stream_events(
        &self,
        question: &str,
    ) -> Result<BoxStream<'static, Result<StreamEvent, GenerationError>>, ServiceError> {
        let (tokens, citations) = self.stream_answer(question).await?;

        let head = stream::once(async move { Ok(StreamEvent::Citations(citations)) });
        let body = tokens.map(|token| token.map(StreamEvent::Token));

        Ok(head.chain(body).boxed())
    }
}
