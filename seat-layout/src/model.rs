//! Positioned output of the layout engine

use serde::Serialize;
use shared::models::TableShape;

use crate::highlight::Highlight;
use crate::strategy::LayoutType;

/// Unit space of a rendered layout.
///
/// Strategies do not share units: free-form layouts are placed in percent of
/// the canvas, column layouts in fixed pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Percent,
    Pixel,
}

/// One table ready for painting. `left`/`top` are the center of the box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedTable {
    pub id: i64,
    pub shape: TableShape,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub border_radius: f64,
    pub active: bool,
}

impl PositionedTable {
    pub fn min_x(&self) -> f64 {
        self.left - self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.top - self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// A visual column (or theater row) and the tables it holds, in render order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnGroup {
    pub key: String,
    pub table_ids: Vec<i64>,
}

/// What a strategy produces before highlighting
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub units: Units,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tables: Vec<PositionedTable>,
    pub columns: Vec<ColumnGroup>,
}

impl Placement {
    /// Percent-space placement on the unit canvas
    pub fn percent(tables: Vec<PositionedTable>) -> Self {
        Self {
            units: Units::Percent,
            canvas_width: 100.0,
            canvas_height: 100.0,
            tables,
            columns: Vec::new(),
        }
    }

    pub fn empty(units: Units) -> Self {
        Self {
            units,
            canvas_width: if units == Units::Percent { 100.0 } else { 0.0 },
            canvas_height: if units == Units::Percent { 100.0 } else { 0.0 },
            tables: Vec::new(),
            columns: Vec::new(),
        }
    }
}

/// Fully computed seating chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLayout {
    pub layout_type: LayoutType,
    pub units: Units,
    /// Width/height ratio the percent canvas is painted at
    pub aspect_ratio: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tables: Vec<PositionedTable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnGroup>,
    pub highlight: Highlight,
}

impl RenderedLayout {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn active_table(&self) -> Option<&PositionedTable> {
        self.tables.iter().find(|t| t.active)
    }

    pub fn table(&self, id: i64) -> Option<&PositionedTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Table ids of a column, if the strategy produced one with that key
    pub fn column(&self, key: &str) -> Option<&[i64]> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.table_ids.as_slice())
    }
}
