//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::EventNotFound | Self::GuestNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error (upstream and configuration failures
            // surface as one generic server error)
            Self::UpstreamUnavailable
            | Self::UpstreamTimeout
            | Self::ConfigError
            | Self::InvalidUpstreamResponse
            | Self::CheckinFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::GuestNameRequired => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::EventNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::UpstreamUnavailable.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ConfigError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::UpstreamTimeout.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::GuestNameRequired.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
