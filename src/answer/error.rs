use thiserror::Error;

use crate::generation::GenerationError;
use crate::pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}
