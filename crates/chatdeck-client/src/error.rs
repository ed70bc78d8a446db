// Client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response; `message` is the raw body text
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}
