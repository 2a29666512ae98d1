//! Load Errors

use thiserror::Error;

/// Every way a table load can fail. All variants are reported the same way.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Endpoint unreachable, fetch rejected, or body unreadable
    #[error("{0}")]
    Transport(String),

    /// Body is not JSON, or records do not have the expected shape
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Envelope parsed but carries no `data` list
    #[error(
        "response has no `data` field{}",
        .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
    )]
    MissingData { message: Option<String> },

    /// Host document has no element with the configured id
    #[error("display container `#{0}` not found")]
    ContainerMissing(String),
}
