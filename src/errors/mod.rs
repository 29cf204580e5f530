use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Provider errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("News provider quota exceeded")]
    QuotaExceeded,

    #[error("Unexpected provider response: {0}")]
    Provider(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Cache snapshot errors
    #[error("Cache snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type NewsResult<T> = Result<T, NewsError>;
