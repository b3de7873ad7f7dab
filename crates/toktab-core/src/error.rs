#[derive(Debug, thiserror::Error)]
pub enum TokTabError {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("request timed out, try again")]
    Timeout,

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokTabError>;
