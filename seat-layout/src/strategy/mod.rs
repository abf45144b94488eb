//! Layout Strategy Selector
//!
//! Every layout type maps to one placement function with the common
//! [`StrategyFn`] signature. Unknown or missing type tags fall back to the
//! free-form strategy.

mod columns;
mod free_form;

pub use columns::{grid, long_tables, theater, zones};
pub use free_form::{custom, u_shape, wide_u_shape};

use serde::Serialize;
use shared::models::{DEFAULT_ASPECT_RATIO, Layout, Table};
use std::fmt;

use crate::highlight::highlight;
use crate::model::{Placement, RenderedLayout};
use crate::shape::SizingPreset;

/// Layout type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    #[default]
    Custom,
    Grid,
    UShape,
    WideUShape,
    LongTables,
    Theater,
    #[serde(rename = "banquet-3")]
    Banquet3,
    #[serde(rename = "banquet-5")]
    Banquet5,
}

impl LayoutType {
    pub const ALL: [LayoutType; 8] = [
        LayoutType::Custom,
        LayoutType::Grid,
        LayoutType::UShape,
        LayoutType::WideUShape,
        LayoutType::LongTables,
        LayoutType::Theater,
        LayoutType::Banquet3,
        LayoutType::Banquet5,
    ];

    /// Parse a raw tag. Case, surrounding whitespace and `_` vs `-` are ignored;
    /// anything unrecognised is [`LayoutType::Custom`].
    pub fn parse(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::Custom;
        };
        let normalized = tag.trim().to_ascii_lowercase().replace(['_', ' '], "-");

        match normalized.as_str() {
            "grid" => Self::Grid,
            "u-shape" | "ushape" => Self::UShape,
            "wide-u-shape" | "wide-ushape" => Self::WideUShape,
            "long-tables" | "longtables" => Self::LongTables,
            "theater" | "theatre" => Self::Theater,
            "banquet-3" | "banquet" | "zones" => Self::Banquet3,
            "banquet-5" => Self::Banquet5,
            "custom" | "" => Self::Custom,
            other => {
                tracing::debug!(layout_type = other, "Unknown layout type, using custom");
                Self::Custom
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Grid => "grid",
            Self::UShape => "u-shape",
            Self::WideUShape => "wide-u-shape",
            Self::LongTables => "long-tables",
            Self::Theater => "theater",
            Self::Banquet3 => "banquet-3",
            Self::Banquet5 => "banquet-5",
        }
    }

    /// Column spacing used whenever this type lays tables out in columns
    pub fn preset(&self) -> &'static SizingPreset {
        match self {
            Self::Custom => &SizingPreset::CUSTOM,
            Self::Grid => &SizingPreset::GRID,
            Self::UShape => &SizingPreset::U_SHAPE,
            Self::WideUShape => &SizingPreset::WIDE_U_SHAPE,
            Self::LongTables => &SizingPreset::LONG_TABLES,
            Self::Theater => &SizingPreset::THEATER,
            Self::Banquet3 => &SizingPreset::BANQUET_3,
            Self::Banquet5 => &SizingPreset::BANQUET_5,
        }
    }

    /// Placement function for this type
    pub fn strategy(&self) -> StrategyFn {
        match self {
            Self::Custom => custom,
            Self::Grid => grid,
            Self::UShape => u_shape,
            Self::WideUShape => wide_u_shape,
            Self::LongTables => long_tables,
            Self::Theater => theater,
            Self::Banquet3 | Self::Banquet5 => zones,
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<&str>> for LayoutType {
    fn from(tag: Option<&str>) -> Self {
        Self::parse(tag)
    }
}

/// Inputs shared by all strategies besides the table list
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext {
    pub layout_type: LayoutType,
    pub preset: &'static SizingPreset,
    pub aspect_ratio: f64,
}

impl StrategyContext {
    pub fn new(layout_type: LayoutType, aspect_ratio: Option<f64>) -> Self {
        Self {
            layout_type,
            preset: layout_type.preset(),
            aspect_ratio: aspect_ratio
                .filter(|r| r.is_finite() && *r > 0.0)
                .unwrap_or(DEFAULT_ASPECT_RATIO),
        }
    }
}

/// Pure placement function: table list in, positioned boxes out
pub type StrategyFn = fn(&[Table], &StrategyContext) -> Placement;

/// Place an event layout and highlight the guest's table
pub fn compute_layout(layout: &Layout, active_table: Option<i64>) -> RenderedLayout {
    let layout_type = LayoutType::parse(layout.layout_type.as_deref());
    compute_layout_as(
        layout_type,
        &layout.tables,
        active_table,
        layout.requested_aspect_ratio(),
    )
}

/// Place `tables` with an explicit layout type
pub fn compute_layout_as(
    layout_type: LayoutType,
    tables: &[Table],
    active_table: Option<i64>,
    aspect_ratio: Option<f64>,
) -> RenderedLayout {
    let ctx = StrategyContext::new(layout_type, aspect_ratio);
    let placement = (layout_type.strategy())(tables, &ctx);

    let mut positioned = placement.tables;
    let state = highlight(&mut positioned, active_table);

    tracing::debug!(
        layout_type = %layout_type,
        input = tables.len(),
        placed = positioned.len(),
        "Computed layout"
    );

    RenderedLayout {
        layout_type,
        units: placement.units,
        aspect_ratio: ctx.aspect_ratio,
        canvas_width: placement.canvas_width,
        canvas_height: placement.canvas_height,
        tables: positioned,
        columns: placement.columns,
        highlight: state,
    }
}
