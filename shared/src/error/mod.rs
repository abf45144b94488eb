//! Unified error system for the guest seating service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Event errors
//! - 2xxx: Guest errors
//! - 9xxx: System errors
//!
//! "Guest not found" is not an error on the wire: the upstream answers
//! `found: false` and the page renders it as an ordinary state.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::EventNotFound);
//! let err = AppError::event_not_found("summer-party");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(1001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
