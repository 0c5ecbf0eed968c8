//! Numbered context blocks and citation records for the answer generator.

pub mod assembler;
pub mod types;

#[cfg(test)]
mod tests;

pub use assembler::{CitationAssembler, resolve_file_url};
pub use types::{AssembledContext, Citation};
