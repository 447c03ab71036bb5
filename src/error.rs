// Error types for the library surface. The binary wraps these in
// `anyhow::Error` and adds context; nothing here is recovered from.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("API_KEY is not set (add it to the environment or a .env file)")]
    MissingApiKey,

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Missing field, wrong type or otherwise malformed JSON.
    #[error("unexpected {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write workout plan: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
