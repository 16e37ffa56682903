use thiserror::Error;

/// Errors shared by the HTTP API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a body that failed to decode as JSON.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Structurally valid JSON carrying a field we could not interpret.
    #[error("Malformed response: {0}")]
    Malformed(String),
}
