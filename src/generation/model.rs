use std::future::Future;
use std::time::Duration;

use futures_util::stream::{self, BoxStream, Stream, StreamExt};

use super::error::GenerationError;
use super::message::Message;

/// Incremental answer text. Each item is one non-empty token chunk.
pub type TokenStream = BoxStream<'static, Result<String, GenerationError>>;

/// A chat model that answers a message list, either whole or incrementally.
pub trait ChatModel: Send + Sync {
    /// Returns the complete answer text.
    fn generate(
        &self,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;

    /// Opens a token stream for the answer.
    fn stream(
        &self,
        messages: &[Message],
    ) -> impl Future<Output = Result<TokenStream, GenerationError>> + Send;
}

impl<M: ChatModel> ChatModel for std::sync::Arc<M> {
    fn generate(
        &self,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, GenerationError>> + Send {
        (**self).generate(messages)
    }

    fn stream(
        &self,
        messages: &[Message],
    ) -> impl Future<Output = Result<TokenStream, GenerationError>> + Send {
        (**self).stream(messages)
    }
}

/// Streams by generating the full answer and yielding it once.
///
/// For backends without incremental output.
#[derive(Debug, Clone)]
pub struct SingleShot<M> {
    inner: M,
}

impl<M: ChatModel> SingleShot<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: ChatModel> ChatModel for SingleShot<M> {
    async fn generate(&self, messages: &[Message]) -> Result<String, GenerationError> {
        self.inner.generate(messages).await
    }

    async fn stream(&self, messages: &[Message]) -> Result<TokenStream, GenerationError> {
        let full = self.inner.generate(messages).await?;
        Ok(stream::once(async move { Ok(full) }).boxed())
    }
}

/// Ends `inner` with [`GenerationError::Timeout`] when no item arrives within `timeout`.
///
/// The clock restarts after every item, so only a stalled stream is cut off.
pub fn with_stall_timeout<S, T>(
    inner: S,
    timeout: Duration,
) -> BoxStream<'static, Result<T, GenerationError>>
where
    S: Stream<Item = Result<T, GenerationError>> + Send + Unpin + 'static,
    T: Send + 'static,
{
    stream::unfold(Some(inner), move |state| async move {
        let mut inner = state?;
        match tokio::time::timeout(timeout, inner.next()).await {
            Ok(Some(item)) => Some((item, Some(inner))),
            Ok(None) => None,
            Err(_) => Some((
                Err(GenerationError::Timeout {
                    secs: timeout.as_secs(),
                }),
                None,
            )),
        }
    })
    .boxed()
}
