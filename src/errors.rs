use thiserror::Error;

#[derive(Debug, Error)]
pub enum GifError {
    #[error("Failed to send HTTP request: {0}")]
    Network(String),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Search returned no results")]
    EmptyResult,

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

// The search URL carries the API key, so it is stripped before the message is kept.
impl From<reqwest::Error> for GifError {
    fn from(error: reqwest::Error) -> Self {
        GifError::Network(error.without_url().to_string())
    }
}

impl From<serde_json::Error> for GifError {
    fn from(error: serde_json::Error) -> Self {
        GifError::MalformedResponse(error.to_string())
    }
}
