//! Guest Client - HTTP client for the upstream event API
//!
//! Typed and pass-through calls for the three upstream endpoints, plus the
//! per-guest lookup session.

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{RawResponse, UpstreamClient};
pub use session::{GuestSession, LookupState, LookupTicket};
