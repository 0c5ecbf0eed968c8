//! Question answering on top of the retrieval pipeline: prompt building, generation,
//! answer cleanup and the streamed event format.

pub mod clean;
pub mod error;
pub mod events;
pub mod prompt;
pub mod service;


pub use clean::clean_answer;
pub use error::ServiceError;
pub use events::StreamEvent;
pub use prompt::build_messages;
pub use service::{Answer, LegalRagService};
