//! Error types for the API client.

/// Errors raised while turning a query into a query string. These are
/// detected before any request is sent.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A field the API requires was empty.
    #[error("{field} must be set")]
    MissingRequiredField { field: &'static str },
    /// A bounded field was set above its maximum.
    #[error("{field} cannot be greater than {max} (got {value})")]
    ValueOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Failures of the underlying HTTP exchange.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Connection, timeout, or body read failure reported by the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The caller cancelled the request before it completed.
    #[error("request cancelled")]
    Cancelled,
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The query failed validation; no request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] EncodingError),
    /// The request could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    /// The API answered with something other than 200 OK.
    #[error("Request failed with status {status} {reason}")]
    UnexpectedStatus { status: u16, reason: String },
    /// The response body was not a valid search response.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
    /// The default HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl Error {
    /// True when the request was aborted through cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Cancelled))
    }

    /// True when the HTTP client gave up waiting on the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Http(e)) if e.is_timeout())
    }
}
