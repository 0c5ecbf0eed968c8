//! End-to-end retrieval pipeline: classify, retrieve, dedup, rerank, filter, assemble.
//!
//! Every tunable (word lists, weights, ratio/cap, `k`, file prefix) arrives through
//! [`PipelineConfig`]; the pipeline holds no other state besides the retriever.

pub mod config;
pub mod error;
pub mod runner;


pub use config::PipelineConfig;
pub use error::PipelineError;
pub use runner::RetrievalPipeline;
