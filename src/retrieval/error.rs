use thiserror::Error;

/// Errors returned by a [`FragmentRetriever`](super::FragmentRetriever).
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The backing index could not be reached.
    #[error("failed to reach index '{index}': {message}")]
    Unavailable {
        /// Index or collection name.
        index: String,
        /// Error message.
        message: String,
    },

    /// The search itself failed.
    #[error("search failed for query '{query}': {message}")]
    SearchFailed {
        /// Search text that was sent.
        query: String,
        /// Error message.
        message: String,
    },

    /// A stored fragment could not be decoded.
    #[error("malformed fragment payload: {reason}")]
    MalformedFragment {
        /// What was wrong with it.
        reason: String,
    },
}
