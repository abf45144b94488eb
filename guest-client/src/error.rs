//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, timeout or TLS error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL cannot address the API
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Upstream answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream answered any other non-success status
    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Upstream failures surface to guests as one generic, retryable message;
/// the specific cause stays in the code and the log.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let code = match &err {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::UpstreamTimeout,
            ClientError::Http(_) | ClientError::Status { .. } => ErrorCode::UpstreamUnavailable,
            ClientError::InvalidUrl(_) => ErrorCode::ConfigError,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::InvalidUpstreamResponse
            }
        };

        if code != ErrorCode::NotFound {
            tracing::error!(error = %err, code = %code, "Upstream request failed");
        }

        let app = AppError::new(code);
        match err {
            ClientError::Status { status, .. } => app.with_detail("upstream_status", status),
            _ => app,
        }
    }
}
