//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with something other than `200 OK`. The body is kept
    /// as a truncated snippet and is never decoded.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not JSON, or not the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Options were rejected before any request was made.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    /// The configured API root could not be turned into a request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code for [`Error::HttpStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
