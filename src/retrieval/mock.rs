use parking_lot::Mutex;

use crate::document::Fragment;
use crate::retrieval::{FragmentRetriever, RetrievalError};

/// Arguments of one `search` call seen by [`MockRetriever`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub k: usize,
}

/// In-memory retriever returning a fixed candidate list and recording every call.
#[derive(Default)]
pub struct MockRetriever {
    candidates: Vec<Fragment>,
    fail_with: Option<String>,
    calls: Mutex<Vec<RecordedSearch>>,
}

impl MockRetriever {
    pub fn new(candidates: Vec<Fragment>) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A retriever whose every search fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedSearch> {
        self.calls.lock().clone()
    }

    pub fn last_query(&self) -> Option<String> {
        self.calls.lock().last().map(|c| c.query.clone())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl FragmentRetriever for MockRetriever {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Fragment>, RetrievalError> {
        self.calls.lock().push(RecordedSearch {
            query: query.to_string(),
            k,
        });

        if let Some(message) = &self.fail_with {
            return Err(RetrievalError::SearchFailed {
                query: query.to_string(),
                message: message.clone(),
            });
        }

        Ok(self.candidates.iter().take(k).cloned().collect())
    }
}
