//! Table Model

use serde::{Deserialize, Serialize};

use super::zone::ZoneId;
use crate::util::lenient_index;

/// Table shape. Anything the upstream sends that is not `round` is drawn as a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Round,
    #[default]
    #[serde(other)]
    Rect,
}

/// Which axis a rectangular table's `size` multiplier extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[serde(other)]
    Vertical,
}

/// Continuous placement, center-anchored, in percent of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderBox {
    pub left_percent: f64,
    pub top_percent: f64,
    pub width_percent: f64,
    pub height_percent: f64,
}

impl RenderBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left_percent: left,
            top_percent: top,
            width_percent: width,
            height_percent: height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.left_percent - self.width_percent / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.left_percent + self.width_percent / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.top_percent - self.height_percent / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.top_percent + self.height_percent / 2.0
    }
}

/// One physical seating unit as delivered by the upstream event API.
///
/// A table is positioned either by discrete grid coordinates (`x`, `y`) or by
/// a continuous `render` box; the active layout strategy decides which one counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: i64,
    #[serde(default)]
    pub shape: TableShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Length multiplier along the orientation axis (a.k.a. `length`)
    #[serde(default, alias = "length", skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Discrete column index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Discrete row index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderBox>,
    /// Raw zone tag; see [`Table::zone`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_index: Option<i64>,
}

impl Table {
    /// Round table at grid position (x, y)
    pub fn round(id: i64, x: f64, y: f64) -> Self {
        Self {
            id,
            shape: TableShape::Round,
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Rectangular table at grid position (x, y)
    pub fn rect(id: i64, x: f64, y: f64, orientation: Orientation, size: f64) -> Self {
        Self {
            id,
            shape: TableShape::Rect,
            orientation: Some(orientation),
            size: Some(size),
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn with_zone(mut self, zone: &str, order_index: i64) -> Self {
        self.zone_id = Some(zone.to_string());
        self.order_index = Some(order_index);
        self
    }

    /// Parsed zone; unknown or missing tags yield `None`
    pub fn zone(&self) -> Option<ZoneId> {
        self.zone_id.as_deref().and_then(|z| z.parse().ok())
    }

    pub fn is_round(&self) -> bool {
        self.shape == TableShape::Round
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_render_table() {
        let json = r#"{
            "id": 2,
            "shape": "round",
            "render": {"leftPercent": 50, "topPercent": 40, "widthPercent": 10, "heightPercent": 12}
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.id, 2);
        assert!(table.is_round());
        let render = table.render.unwrap();
        assert_eq!(render.min_x(), 45.0);
        assert_eq!(render.max_y(), 46.0);
    }

    #[test]
    fn test_unknown_shape_is_rect() {
        let table: Table =
            serde_json::from_str(r#"{"id":1,"shape":"square","orientation":"diagonal"}"#).unwrap();
        assert_eq!(table.shape, TableShape::Rect);
        assert_eq!(table.orientation, Some(Orientation::Vertical));
    }

    #[test]
    fn test_length_alias_and_zone() {
        let table: Table = serde_json::from_str(
            r#"{"id":7,"shape":"rect","orientation":"horizontal","length":3,"zoneId":"Left","orderIndex":4}"#,
        )
        .unwrap();
        assert_eq!(table.size, Some(3.0));
        assert_eq!(table.zone(), Some(ZoneId::Left));
        assert_eq!(table.order_index, Some(4));
    }

    #[test]
    fn test_loose_order_index() {
        let parse = |raw: &str| {
            let json = format!(r#"{{"id":1,"orderIndex":{raw}}}"#);
            serde_json::from_str::<Table>(&json).unwrap().order_index
        };
        assert_eq!(parse("1.6"), Some(2));
        assert_eq!(parse(r#""3""#), Some(3));
        assert_eq!(parse(r#""first""#), None);
        assert_eq!(parse("null"), None);
        assert_eq!(parse("[1]"), None);
    }

    #[test]
    fn test_unknown_zone_is_none() {
        let table = Table::round(1, 0.0, 0.0).with_zone("balcony", 1);
        assert_eq!(table.zone(), None);
    }
}
