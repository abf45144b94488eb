//! Layout Model

use serde::{Deserialize, Serialize};

use super::table::Table;
use crate::util::null_as_default;

/// Decode the table list entry by entry, dropping tables that do not parse
/// so one malformed table does not hide the rest of the chart.
fn skip_malformed_tables<'de, D>(deserializer: D) -> Result<Vec<Table>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = null_as_default(deserializer)?;
    let total = raw.len();
    let tables: Vec<Table> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Table>(value) {
            Ok(table) => Some(table),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed table");
                None
            }
        })
        .collect();
    if tables.len() < total {
        tracing::warn!(kept = tables.len(), total, "Layout contained malformed tables");
    }
    Ok(tables)
}

/// Canvas width/height ratio used when the event does not specify one
pub const DEFAULT_ASPECT_RATIO: f64 = 1.5;

/// An event's table set plus rendering hints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Strategy tag (`custom`, `grid`, `u-shape`, ...); unrecognised tags fall back to `custom`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    #[serde(default, deserialize_with = "skip_malformed_tables")]
    pub tables: Vec<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LayoutMetadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

impl Layout {
    pub fn new(layout_type: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            layout_type: Some(layout_type.into()),
            tables,
            metadata: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.metadata = Some(LayoutMetadata {
            aspect_ratio: Some(aspect_ratio),
        });
        self
    }

    /// Requested aspect ratio, if present and usable
    pub fn requested_aspect_ratio(&self) -> Option<f64> {
        self.metadata
            .as_ref()
            .and_then(|m| m.aspect_ratio)
            .filter(|r| r.is_finite() && *r > 0.0)
    }

    /// Canvas aspect ratio, defaulting to [`DEFAULT_ASPECT_RATIO`]
    pub fn aspect_ratio(&self) -> f64 {
        self.requested_aspect_ratio().unwrap_or(DEFAULT_ASPECT_RATIO)
    }
}
