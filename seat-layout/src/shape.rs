//! Shape Resolver
//!
//! Turns a table's shape/orientation/size into a concrete box. Discrete
//! tables get pixel sizes from the active [`SizingPreset`]; tables carrying a
//! percent render box keep it, after sanitizing non-finite or non-positive
//! values.

use shared::models::{Orientation, RenderBox, Table, TableShape};

/// Upper bound of a rectangular table's length multiplier
pub const MAX_SIZE: f64 = 6.0;

/// Corner radius of rectangular tables in pixel layouts
pub const RECT_CORNER_RADIUS: f64 = 12.0;

/// Corner radius of rectangular tables in percent layouts, relative to the shorter side
pub const RECT_CORNER_RATIO: f64 = 0.2;

/// Width/height given to a render box that arrives without a usable one
pub const FALLBACK_RENDER_SIZE: f64 = 8.0;

/// Spacing and unit sizes of one column-style layout, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingPreset {
    pub column_gap: f64,
    pub row_gap: f64,
    pub base_unit: f64,
    pub round_size: f64,
    /// Horizontal padding inside each column
    pub column_padding: f64,
    /// Every table gets the same footprint regardless of `size`/orientation
    pub uniform_units: bool,
}

impl SizingPreset {
    const fn new(column_gap: f64, row_gap: f64, base_unit: f64, round_size: f64, column_padding: f64) -> Self {
        Self {
            column_gap,
            row_gap,
            base_unit,
            round_size,
            column_padding,
            uniform_units: false,
        }
    }

    pub const CUSTOM: Self = Self::new(20.0, 16.0, 40.0, 50.0, 4.0);
    pub const GRID: Self = Self::new(24.0, 24.0, 44.0, 56.0, 0.0);
    pub const U_SHAPE: Self = Self::new(16.0, 12.0, 42.0, 52.0, 4.0);
    pub const WIDE_U_SHAPE: Self = Self::new(24.0, 16.0, 48.0, 60.0, 8.0);
    pub const BANQUET_3: Self = Self::new(32.0, 32.0, 46.0, 64.0, 8.0);
    pub const BANQUET_5: Self = Self::new(40.0, 32.0, 44.0, 60.0, 8.0);
    /// Single stack; the column gap is never used
    pub const LONG_TABLES: Self = Self::new(0.0, 16.0, 50.0, 60.0, 0.0);
    pub const THEATER: Self = Self {
        uniform_units: true,
        ..Self::new(8.0, 8.0, 28.0, 28.0, 0.0)
    };
}

/// Concrete footprint of one table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedShape {
    pub width: f64,
    pub height: f64,
    pub border_radius: f64,
}

/// Length multiplier clamped to `(0, MAX_SIZE]`; anything unusable counts as 1
pub fn clamp_size(size: Option<f64>) -> f64 {
    match size {
        Some(s) if s.is_finite() && s > 0.0 => s.min(MAX_SIZE),
        _ => 1.0,
    }
}

/// Pixel footprint of a discretely placed table.
///
/// `default_orientation` applies when the table does not carry one.
pub fn resolve_discrete(
    table: &Table,
    preset: &SizingPreset,
    default_orientation: Orientation,
) -> ResolvedShape {
    if table.shape == TableShape::Round {
        return ResolvedShape {
            width: preset.round_size,
            height: preset.round_size,
            border_radius: preset.round_size / 2.0,
        };
    }

    if preset.uniform_units {
        return ResolvedShape {
            width: preset.base_unit,
            height: preset.base_unit,
            border_radius: RECT_CORNER_RADIUS.min(preset.base_unit / 2.0),
        };
    }

    let length = preset.base_unit * clamp_size(table.size);
    let (width, height) = match table.orientation.unwrap_or(default_orientation) {
        Orientation::Horizontal => (length, preset.base_unit),
        Orientation::Vertical => (preset.base_unit, length),
    };

    ResolvedShape {
        width,
        height,
        border_radius: RECT_CORNER_RADIUS,
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn extent_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(100.0)
    } else {
        fallback
    }
}

/// Sanitized copy of an upstream render box.
///
/// Valid values pass through unchanged. Non-finite centers move to the middle
/// of the canvas; missing or non-positive extents get [`FALLBACK_RENDER_SIZE`];
/// extents are capped at the full canvas.
pub fn sanitize_render(render: &RenderBox) -> RenderBox {
    let sanitized = RenderBox {
        left_percent: finite_or(render.left_percent, 50.0),
        top_percent: finite_or(render.top_percent, 50.0),
        width_percent: extent_or(render.width_percent, FALLBACK_RENDER_SIZE),
        height_percent: extent_or(render.height_percent, FALLBACK_RENDER_SIZE),
    };
    if sanitized != *render {
        tracing::warn!(?render, ?sanitized, "Sanitized malformed render box");
    }
    sanitized
}

/// Corner radius of a percent box
pub fn percent_border_radius(shape: TableShape, width: f64, height: f64) -> f64 {
    match shape {
        TableShape::Round => width.min(height) / 2.0,
        TableShape::Rect => width.min(height) * RECT_CORNER_RATIO,
    }
}
