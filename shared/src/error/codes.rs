//! Unified error codes for the guest seating service
//!
//! This module defines all error codes used across the server, the upstream
//! client and the browser. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Event errors
//! - 2xxx: Guest errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Upstream resource not found
    NotFound = 3,

    // ==================== 1xxx: Event ====================
    /// Event does not exist upstream
    EventNotFound = 1001,

    // ==================== 2xxx: Guest ====================
    /// Guest name not on the guest list
    GuestNotFound = 2001,
    /// Guest name missing or blank
    GuestNameRequired = 2002,
    /// Check-in could not be recorded
    CheckinFailed = 2003,

    // ==================== 9xxx: System ====================
    /// Upstream API unreachable
    UpstreamUnavailable = 9003,
    /// Upstream API timed out
    UpstreamTimeout = 9004,
    /// Server configuration incomplete
    ConfigError = 9005,
    /// Upstream API returned an unexpected payload
    InvalidUpstreamResponse = 9006,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            Self::Success => "Operation completed successfully",
            Self::NotFound => "Resource not found",

            // Event
            Self::EventNotFound => "Event not found",

            // Guest
            Self::GuestNotFound => {
                "We couldn't find your name on the guest list. Please check the spelling or contact the host."
            }
            Self::GuestNameRequired => "Missing guest name",
            Self::CheckinFailed => "Check-in could not be recorded",

            // System
            Self::UpstreamUnavailable => "Something went wrong. Please try again.",
            Self::UpstreamTimeout => "The event service took too long to respond",
            Self::ConfigError => "Service is not configured",
            Self::InvalidUpstreamResponse => "Unexpected response from the event service",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown numeric value into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            3 => Ok(ErrorCode::NotFound),

            // Event
            1001 => Ok(ErrorCode::EventNotFound),

            // Guest
            2001 => Ok(ErrorCode::GuestNotFound),
            2002 => Ok(ErrorCode::GuestNameRequired),
            2003 => Ok(ErrorCode::CheckinFailed),

            // System
            9003 => Ok(ErrorCode::UpstreamUnavailable),
            9004 => Ok(ErrorCode::UpstreamTimeout),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::InvalidUpstreamResponse),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
