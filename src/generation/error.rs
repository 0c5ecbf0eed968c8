use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API_GPT or OPENAI_API_KEY not set")]
    MissingApiKey,

    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("failed to decode model response: {message}")]
    Decode { message: String },

    #[error("model did not answer within {secs}s")]
    Timeout { secs: u64 },

    #[error("provider error: {0}")]
    Provider(#[from] genai::Error),
}
