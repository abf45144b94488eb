//! Percent-space strategies driven by upstream render boxes

use shared::models::{RenderBox, Table};

use super::{StrategyContext, columns};
use crate::model::{Placement, PositionedTable};
use crate::normalize::{
    SAFE_PERCENT, U_SHAPE_SAFE_PERCENT, WIDE_U_SAFE_PERCENT, normalize, normalize_horizontal,
};
use crate::shape::{percent_border_radius, sanitize_render};

/// Free-form layout: render boxes as drawn by the host, fitted to the canvas
pub fn custom(tables: &[Table], ctx: &StrategyContext) -> Placement {
    place_or_fall_back(tables, ctx, |boxes| {
        normalize(boxes, SAFE_PERCENT);
    })
}

/// U-shape layout: like free-form with a slightly larger occupied area
pub fn u_shape(tables: &[Table], ctx: &StrategyContext) -> Placement {
    place_or_fall_back(tables, ctx, |boxes| {
        normalize(boxes, U_SHAPE_SAFE_PERCENT);
    })
}

/// Wide U-shape layout: only the horizontal axis is corrected
pub fn wide_u_shape(tables: &[Table], ctx: &StrategyContext) -> Placement {
    place_or_fall_back(tables, ctx, |boxes| {
        normalize_horizontal(boxes, WIDE_U_SAFE_PERCENT);
    })
}

/// Render boxes when any table has one, otherwise columns by grid position
fn place_or_fall_back(
    tables: &[Table],
    ctx: &StrategyContext,
    fit: impl FnOnce(&mut [RenderBox]),
) -> Placement {
    if !tables.is_empty() && tables.iter().all(|t| t.render.is_none()) {
        tracing::debug!(
            layout_type = %ctx.layout_type,
            "No render boxes, falling back to column layout"
        );
        return columns::grid(tables, ctx);
    }

    let placed: Vec<&Table> = tables.iter().filter(|t| t.render.is_some()).collect();
    let dropped = tables.len() - placed.len();
    if dropped > 0 {
        tracing::warn!(
            layout_type = %ctx.layout_type,
            dropped,
            "Tables without a render box left out of the chart"
        );
    }

    let mut boxes: Vec<RenderBox> = placed
        .iter()
        .filter_map(|t| t.render.as_ref().map(sanitize_render))
        .collect();
    fit(&mut boxes);

    let positioned = placed
        .iter()
        .zip(boxes)
        .map(|(table, b)| PositionedTable {
            id: table.id,
            shape: table.shape,
            left: b.left_percent,
            top: b.top_percent,
            width: b.width_percent,
            height: b.height_percent,
            border_radius: percent_border_radius(table.shape, b.width_percent, b.height_percent),
            active: false,
        })
        .collect();

    Placement::percent(positioned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Units;
    use crate::strategy::LayoutType;
    use shared::models::Orientation;

    fn at(id: i64, left: f64, top: f64, width: f64, height: f64) -> Table {
        Table {
            render: Some(RenderBox::new(left, top, width, height)),
            ..Table::round(id, 0.0, 0.0)
        }
    }

    fn ctx(layout_type: LayoutType) -> StrategyContext {
        StrategyContext::new(layout_type, None)
    }

    fn in_canvas(p: &Placement) -> bool {
        p.tables.iter().all(|t| {
            t.min_x() >= -1e-6 && t.max_x() <= 100.0 + 1e-6 && t.min_y() >= -1e-6 && t.max_y() <= 100.0 + 1e-6
        })
    }

    #[test]
    fn test_three_round_tables() {
        let tables = vec![
            at(1, 30.0, 50.0, 10.0, 10.0),
            at(2, 50.0, 50.0, 10.0, 10.0),
            at(3, 70.0, 50.0, 10.0, 10.0),
        ];
        let p = custom(&tables, &ctx(LayoutType::Custom));
        assert_eq!(p.units, Units::Percent);
        let ids: Vec<i64> = p.tables.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // already fits: positions kept, centered
        assert_eq!(p.tables[1].left, 50.0);
        assert_eq!(p.tables[1].border_radius, 5.0);
        assert!(in_canvas(&p));
    }

    #[test]
    fn test_single_table_is_centered() {
        let p = custom(&[at(7, 10.0, 15.0, 12.0, 8.0)], &ctx(LayoutType::Custom));
        let t = &p.tables[0];
        assert_eq!((t.left, t.top, t.width, t.height), (50.0, 50.0, 12.0, 8.0));
    }

    #[test]
    fn test_empty_renders_nothing() {
        let p = custom(&[], &ctx(LayoutType::Custom));
        assert!(p.tables.is_empty());
        assert_eq!(p.units, Units::Percent);
    }

    #[test]
    fn test_oversized_u_shape_fits_canvas() {
        let tables = vec![
            at(1, -20.0, 10.0, 10.0, 30.0),
            at(2, 50.0, 110.0, 40.0, 10.0),
            at(3, 120.0, 10.0, 10.0, 30.0),
        ];
        let p = u_shape(&tables, &ctx(LayoutType::UShape));
        assert!(in_canvas(&p));
        let span = p.tables.iter().map(|t| t.max_x()).fold(f64::MIN, f64::max)
            - p.tables.iter().map(|t| t.min_x()).fold(f64::MAX, f64::min);
        assert!((span - U_SHAPE_SAFE_PERCENT).abs() < 1e-9);
    }

    #[test]
    fn test_wide_u_keeps_vertical_values() {
        let tables = vec![
            at(1, -15.0, 30.0, 10.0, 20.0),
            at(2, 50.0, 85.0, 30.0, 10.0),
            at(3, 115.0, 30.0, 10.0, 20.0),
        ];
        let p = wide_u_shape(&tables, &ctx(LayoutType::WideUShape));
        for (raw, placed) in tables.iter().zip(&p.tables) {
            let raw = raw.render.unwrap();
            assert_eq!(placed.top, raw.top_percent);
            assert_eq!(placed.height, raw.height_percent);
            assert!(placed.width < raw.width_percent);
        }
        assert!(in_canvas(&p));
    }

    #[test]
    fn test_tables_without_render_are_dropped() {
        let tables = vec![at(1, 40.0, 50.0, 10.0, 10.0), Table::round(2, 1.0, 1.0)];
        let p = custom(&tables, &ctx(LayoutType::Custom));
        assert_eq!(p.tables.len(), 1);
        assert_eq!(p.tables[0].id, 1);
    }

    #[test]
    fn test_falls_back_to_columns_without_render_boxes() {
        let tables = vec![
            Table::round(1, 0.0, 0.0),
            Table::rect(2, 1.0, 0.0, Orientation::Vertical, 2.0),
        ];
        let p = u_shape(&tables, &ctx(LayoutType::UShape));
        assert_eq!(p.units, Units::Pixel);
        assert_eq!(p.columns.len(), 2);
        // u-shape preset: round 52, base 42
        assert_eq!(p.tables[0].width, 52.0);
        assert_eq!(p.tables[1].height, 84.0);
    }

    #[test]
    fn test_overlapping_tables_are_separated() {
        let tables = vec![at(1, 50.0, 50.0, 10.0, 10.0), at(2, 52.0, 50.0, 10.0, 10.0)];
        let p = custom(&tables, &ctx(LayoutType::Custom));
        let (a, b) = (&p.tables[0], &p.tables[1]);
        assert!(b.min_x() >= a.max_x() - 1e-9);
        assert_eq!(a.width, 10.0);
    }
}
