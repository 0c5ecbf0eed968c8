use std::sync::Arc;

use super::error::RetrievalError;
use crate::document::Fragment;

/// Similarity search over pre-chunked fragments.
///
/// Implementations return at most `k` fragments ordered by descending similarity. An empty
/// result is valid and means nothing matched.
pub trait FragmentRetriever: Send + Sync {
    fn search(
        &self,
        query: &str,
        k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Fragment>, RetrievalError>> + Send;
}

impl<R: FragmentRetriever> FragmentRetriever for Arc<R> {
    fn search(
        &self,
        query: &str,
        k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Fragment>, RetrievalError>> + Send {
        (**self).search(query, k)
    }
}
