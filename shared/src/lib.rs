//! Shared types for the guest seating service
//!
//! Wire models exchanged with the upstream event API, the unified error
//! system and small utilities used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
