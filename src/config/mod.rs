//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VERDICT_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_FILE_SERVING_PREFIX, DEFAULT_GENERATION_TIMEOUT_SECS, DEFAULT_OLLAMA_MODEL,
    DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_MODEL, DEFAULT_TOP_K,
};
use crate::pipeline::PipelineConfig;
use crate::ranking::{OperatingPoint, ScoringWeights};

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERDICT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidates requested from the retriever. Default: `100`.
    pub top_k: usize,

    /// Adaptive filter ratio/cap. Default: broad (`0.7` / `30`).
    pub operating_point: OperatingPoint,

    /// URL prefix for citation file links. Default: `http://localhost:8005/api/files`.
    pub file_serving_prefix: String,

    /// Whether reversed-text matches contribute to the score. Default: `true`.
    pub reversed_matching: bool,

    /// Generation backend name; `openai` selects the hosted model. Default: `ollama`.
    pub model_type: String,

    /// Ollama endpoint. Default: `http://localhost:11434`.
    pub ollama_url: String,

    /// Local model name. Default: `llama3`.
    pub ollama_model: String,

    /// Hosted model name. Default: `gpt-4o-mini`.
    pub openai_model: String,

    /// Per-request generation timeout. Default: 45 seconds.
    pub generation_timeout: Duration,
}

/// Backend used when `VERDICT_MODEL_TYPE` is not set.
pub const DEFAULT_MODEL_TYPE: &str = "ollama";

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            operating_point: OperatingPoint::broad(),
            file_serving_prefix: DEFAULT_FILE_SERVING_PREFIX.to_string(),
            reversed_matching: true,
            model_type: DEFAULT_MODEL_TYPE.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            generation_timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        }
    }
}

impl Config {
    const ENV_TOP_K: &'static str = "VERDICT_TOP_K";
    const ENV_OPERATING_POINT: &'static str = "VERDICT_OPERATING_POINT";
    const ENV_RATIO: &'static str = "VERDICT_RATIO";
    const ENV_CAP: &'static str = "VERDICT_CAP";
    const ENV_FILE_SERVING_PREFIX: &'static str = "VERDICT_FILE_SERVING_PREFIX";
    const ENV_REVERSED_MATCHING: &'static str = "VERDICT_REVERSED_MATCHING";
    const ENV_MODEL_TYPE: &'static str = "VERDICT_MODEL_TYPE";
    const ENV_OLLAMA_URL: &'static str = "VERDICT_OLLAMA_URL";
    const ENV_OLLAMA_MODEL: &'static str = "VERDICT_OLLAMA_MODEL";
    const ENV_OPENAI_MODEL: &'static str = "VERDICT_OPENAI_MODEL";
    const ENV_GENERATION_TIMEOUT_SECS: &'static str = "VERDICT_GENERATION_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults) and
    /// validates the result.
    ///
    /// `VERDICT_RATIO` and `VERDICT_CAP` override the matching half of the named
    /// operating point.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let top_k = Self::parse_from_env(Self::ENV_TOP_K, defaults.top_k)?;
        let base_point = Self::parse_operating_point_from_env(defaults.operating_point)?;
        let ratio = Self::parse_f32_from_env(Self::ENV_RATIO, base_point.ratio)?;
        let cap = Self::parse_from_env(Self::ENV_CAP, base_point.cap)?;
        let file_serving_prefix =
            Self::parse_string_from_env(Self::ENV_FILE_SERVING_PREFIX, defaults.file_serving_prefix);
        let reversed_matching =
            Self::parse_bool_from_env(Self::ENV_REVERSED_MATCHING, defaults.reversed_matching)?;
        let model_type = Self::parse_string_from_env(Self::ENV_MODEL_TYPE, defaults.model_type);
        let ollama_url = Self::parse_string_from_env(Self::ENV_OLLAMA_URL, defaults.ollama_url);
        let ollama_model = Self::parse_string_from_env(Self::ENV_OLLAMA_MODEL, defaults.ollama_model);
        let openai_model = Self::parse_string_from_env(Self::ENV_OPENAI_MODEL, defaults.openai_model);
        let timeout_secs = Self::parse_from_env(
            Self::ENV_GENERATION_TIMEOUT_SECS,
            defaults.generation_timeout.as_secs(),
        )?;

        let config = Self {
            top_k,
            operating_point: OperatingPoint::new(ratio, cap),
            file_serving_prefix,
            reversed_matching,
            model_type,
            ollama_url,
            ollama_model,
            openai_model,
            generation_timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;

        Ok(config)
    }

    /// Checks numeric ranges and required values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK { value: self.top_k });
        }

        self.operating_point.validate()?;

        if self.generation_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        if self.ollama_url.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_OLLAMA_URL,
            });
        }

        Ok(())
    }

    /// Returns `true` when the hosted backend is selected.
    pub fn uses_openai(&self) -> bool {
        self.model_type.trim().eq_ignore_ascii_case("openai")
    }

    /// Pipeline configuration derived from these settings, with the default word lists.
    pub fn pipeline(&self) -> PipelineConfig {
        let weights = if self.reversed_matching {
            ScoringWeights::default()
        } else {
            ScoringWeights::default().without_reversed_matching()
        };

        PipelineConfig::default()
            .with_top_k(self.top_k)
            .with_operating_point(self.operating_point)
            .with_weights(weights)
            .with_serving_prefix(self.file_serving_prefix.clone())
    }

    fn parse_operating_point_from_env(
        default: OperatingPoint,
    ) -> Result<OperatingPoint, ConfigError> {
        match env::var(Self::ENV_OPERATING_POINT) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "broad" => Ok(OperatingPoint::broad()),
                "precise" => Ok(OperatingPoint::precise()),
                _ => Err(ConfigError::InvalidOperatingPoint { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_from_env<T>(name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::IntParseError {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f32_from_env(name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::FloatParseError {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidBool { name, value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(name: &str, default: String) -> String {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
