use thiserror::Error;

use crate::retrieval::RetrievalError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("citation assembly task failed: {0}")]
    Assembly(#[from] tokio::task::JoinError),

    #[error("invalid pipeline configuration: {reason}")]
    InvalidConfig { reason: String },
}
