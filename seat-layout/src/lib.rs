//! # seat-layout
//!
//! Seating chart geometry: turns an event's table list into positioned,
//! highlighted boxes ready for painting.
//!
//! ## Pipeline
//!
//! - [`strategy`] picks a placement function from the layout type tag
//! - [`shape`] sizes each table from its shape, orientation and length
//! - [`normalize`] fits percent render boxes onto the canvas
//! - [`highlight`] marks the guest's table
//! - [`svg`] paints the result
//!
//! Every step is pure and synchronous. Malformed geometry is clamped or
//! defaulted and reported through `tracing`; nothing here returns an error.
//!
//! ## Example
//!
//! ```ignore
//! use seat_layout::{compute_layout, render_svg};
//!
//! let rendered = compute_layout(&event.layout, guest.table);
//! if rendered.highlight.shows_layout() {
//!     let svg = render_svg(&rendered, &event.name);
//! }
//! ```

pub mod highlight;
pub mod model;
pub mod normalize;
pub mod shape;
pub mod strategy;
pub mod svg;

// Re-exports
pub use highlight::{Highlight, highlight};
pub use model::{ColumnGroup, Placement, PositionedTable, RenderedLayout, Units};
pub use normalize::{Normalization, normalize, normalize_horizontal};
pub use shape::{ResolvedShape, SizingPreset};
pub use strategy::{LayoutType, StrategyContext, StrategyFn, compute_layout, compute_layout_as};
pub use svg::render_svg;
