use thiserror::Error;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API key is invalid or missing")]
    InvalidApiKey,

    #[error("Quota exceeded - please try again tomorrow")]
    QuotaExceeded,

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout: upstream did not respond")]
    Timeout,

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
