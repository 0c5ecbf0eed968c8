//! Configuration error types.

use thiserror::Error;

use crate::ranking::OperatingPointError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A float variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    FloatParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A boolean variable was not one of `true`/`false`/`1`/`0`/`yes`/`no`.
    #[error("invalid boolean {name}='{value}'")]
    InvalidBool { name: &'static str, value: String },

    /// Operating point name was neither `broad` nor `precise`.
    #[error("invalid operating point '{value}': expected 'broad' or 'precise'")]
    InvalidOperatingPoint { value: String },

    /// Filter ratio is outside `0.0..=1.0`.
    #[error("invalid ratio {value}: must be between 0.0 and 1.0")]
    InvalidRatio { value: f32 },

    /// Filter cap is zero.
    #[error("invalid cap {value}: must be at least 1")]
    InvalidCap { value: usize },

    /// Candidate count is zero.
    #[error("invalid top_k {value}: must be at least 1")]
    InvalidTopK { value: usize },

    /// Generation timeout is zero.
    #[error("invalid generation timeout: must be at least 1 second")]
    InvalidTimeout,

    /// A URL-valued setting is empty.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },
}

impl From<OperatingPointError> for ConfigError {
    fn from(err: OperatingPointError) -> Self {
        match err {
            OperatingPointError::InvalidRatio { value } => Self::InvalidRatio { value },
            OperatingPointError::InvalidCap { value } => Self::InvalidCap { value },
        }
    }
}
