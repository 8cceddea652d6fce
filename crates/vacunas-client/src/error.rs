//! Gateway error types.
//!
//! Only the strict `try_*` operations return these. The absorbing operations
//! (`list`, `register`) log them and collapse to an empty list or `false`.
//! Configuration problems are reported separately as
//! [`ConfigError`](crate::config::ConfigError), before any client exists.

/// Errors from backend calls. Every variant names the endpoint it came from.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response: connection refused, timeout,
    /// or a body that could not be read.
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend answered with a non-2xx status.
    #[error("{endpoint} answered {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The response body was not a JSON array.
    #[error("{endpoint} did not return a JSON array: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
}

impl ClientError {
    /// The endpoint (`METHOD /path`) the failed call targeted.
    pub fn endpoint(&self) -> &str {
        match self {
            ClientError::Http { endpoint, .. }
            | ClientError::ApiError { endpoint, .. }
            | ClientError::Deserialization { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status of a rejected call.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
