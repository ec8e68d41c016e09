use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("OPENROUTER_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream rejected the request: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("stream error: {0}")]
    Stream(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
