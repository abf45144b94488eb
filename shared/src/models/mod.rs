//! Data models
//!
//! Mirrors of the upstream event API payloads. Nothing here is persisted:
//! every value is rebuilt from an API response on each request.

pub mod event;
pub mod guest;
pub mod layout;
pub mod table;
pub mod zone;

// Re-exports
pub use event::*;
pub use guest::*;
pub use layout::*;
pub use table::*;
pub use zone::*;
