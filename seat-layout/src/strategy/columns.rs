//! Pixel-space strategies driven by discrete grid coordinates and zones

use shared::models::{Orientation, Table, ZoneId};

use super::StrategyContext;
use crate::model::{ColumnGroup, Placement, PositionedTable, Units};
use crate::shape::{ResolvedShape, SizingPreset, resolve_discrete};

/// One visual line of tables, already in render order
struct Line<'a> {
    key: String,
    tables: Vec<&'a Table>,
}

/// Grid coordinate with missing or non-finite values treated as 0
fn coordinate(value: Option<f64>) -> f64 {
    match value {
        // `+ 0.0` folds -0.0 into 0.0 so both land in the same bucket
        Some(v) if v.is_finite() => v + 0.0,
        _ => 0.0,
    }
}

/// Group tables by `key_of`, buckets ordered by key ascending.
/// Bucket contents keep input order.
fn bucket_by<'a>(tables: &'a [Table], key_of: impl Fn(&Table) -> f64) -> Vec<(f64, Vec<&'a Table>)> {
    let mut buckets: Vec<(f64, Vec<&Table>)> = Vec::new();
    for table in tables {
        let key = key_of(table);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(table),
            None => buckets.push((key, vec![table])),
        }
    }
    buckets.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    buckets
}

/// Lay columns out left to right, stacking each column top to bottom.
/// Tables are centered horizontally within their column.
fn stack_columns(lines: Vec<Line<'_>>, preset: &SizingPreset, default_orientation: Orientation) -> Placement {
    let lines: Vec<Line<'_>> = lines.into_iter().filter(|l| !l.tables.is_empty()).collect();
    if lines.is_empty() {
        return Placement::empty(Units::Pixel);
    }

    let mut tables = Vec::new();
    let mut columns = Vec::with_capacity(lines.len());
    let mut cursor_x = 0.0;
    let mut canvas_height: f64 = 0.0;

    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            cursor_x += preset.column_gap;
        }

        let shapes: Vec<ResolvedShape> = line
            .tables
            .iter()
            .map(|t| resolve_discrete(t, preset, default_orientation))
            .collect();
        let inner_width = shapes.iter().map(|s| s.width).fold(0.0, f64::max);
        let column_width = inner_width + 2.0 * preset.column_padding;
        let center_x = cursor_x + column_width / 2.0;

        let mut cursor_y = 0.0;
        for (j, (table, shape)) in line.tables.iter().zip(&shapes).enumerate() {
            if j > 0 {
                cursor_y += preset.row_gap;
            }
            tables.push(positioned(table, shape, center_x, cursor_y + shape.height / 2.0));
            cursor_y += shape.height;
        }

        canvas_height = canvas_height.max(cursor_y);
        cursor_x += column_width;
        columns.push(ColumnGroup {
            key: line.key,
            table_ids: line.tables.iter().map(|t| t.id).collect(),
        });
    }

    Placement {
        units: Units::Pixel,
        canvas_width: cursor_x,
        canvas_height,
        tables,
        columns,
    }
}

fn positioned(table: &Table, shape: &ResolvedShape, left: f64, top: f64) -> PositionedTable {
    PositionedTable {
        id: table.id,
        shape: table.shape,
        left,
        top,
        width: shape.width,
        height: shape.height,
        border_radius: shape.border_radius,
        active: false,
    }
}

fn coordinate_key(value: f64) -> String {
    format!("{value}")
}

/// Grid layout: columns by `x`, each column sorted by `y`
pub fn grid(tables: &[Table], ctx: &StrategyContext) -> Placement {
    let lines = bucket_by(tables, |t| coordinate(t.x))
        .into_iter()
        .map(|(x, mut column)| {
            column.sort_by(|a, b| coordinate(a.y).total_cmp(&coordinate(b.y)));
            Line {
                key: coordinate_key(x),
                tables: column,
            }
        })
        .collect();

    stack_columns(lines, ctx.preset, Orientation::Vertical)
}

/// Banquet layout: one column per zone, each sorted by `orderIndex`.
///
/// Tables without a recognised zone are not drawn. A missing `orderIndex`
/// sorts after every present one.
pub fn zones(tables: &[Table], ctx: &StrategyContext) -> Placement {
    let unzoned = tables.iter().filter(|t| t.zone().is_none()).count();
    if unzoned > 0 {
        tracing::warn!(
            layout_type = %ctx.layout_type,
            unzoned,
            "Tables without a zone left out of the chart"
        );
    }

    let lines = ZoneId::ALL
        .iter()
        .map(|zone| {
            let mut column: Vec<&Table> = tables.iter().filter(|t| t.zone() == Some(*zone)).collect();
            column.sort_by_key(|t| (t.order_index.is_none(), t.order_index));
            Line {
                key: zone.as_str().to_string(),
                tables: column,
            }
        })
        .collect();

    stack_columns(lines, ctx.preset, Orientation::Vertical)
}

/// Long-tables layout: a single stack sorted by `y`, tables horizontal by default.
///
/// The canvas is widened to the requested aspect ratio with the stack centered.
pub fn long_tables(tables: &[Table], ctx: &StrategyContext) -> Placement {
    let mut stack: Vec<&Table> = tables.iter().collect();
    stack.sort_by(|a, b| coordinate(a.y).total_cmp(&coordinate(b.y)));

    let mut placement = stack_columns(
        vec![Line {
            key: "tables".to_string(),
            tables: stack,
        }],
        ctx.preset,
        Orientation::Horizontal,
    );

    let target_width = placement.canvas_height * ctx.aspect_ratio;
    if target_width > placement.canvas_width {
        let shift = (target_width - placement.canvas_width) / 2.0;
        placement.tables.iter_mut().for_each(|t| t.left += shift);
        placement.canvas_width = target_width;
    }
    placement
}

/// Theater layout: rows by `y` top to bottom, each row sorted by `x`.
///
/// Every unit has the same footprint and each row is centered horizontally.
pub fn theater(tables: &[Table], ctx: &StrategyContext) -> Placement {
    let preset = ctx.preset;
    let rows: Vec<(f64, Vec<&Table>)> = bucket_by(tables, |t| coordinate(t.y))
        .into_iter()
        .map(|(y, mut row)| {
            row.sort_by(|a, b| coordinate(a.x).total_cmp(&coordinate(b.x)));
            (y, row)
        })
        .collect();
    if rows.is_empty() {
        return Placement::empty(Units::Pixel);
    }

    let resolved: Vec<Vec<ResolvedShape>> = rows
        .iter()
        .map(|(_, row)| {
            row.iter()
                .map(|t| resolve_discrete(t, preset, Orientation::Vertical))
                .collect()
        })
        .collect();
    let row_width = |shapes: &[ResolvedShape]| {
        shapes.iter().map(|s| s.width).sum::<f64>()
            + preset.column_gap * shapes.len().saturating_sub(1) as f64
    };
    let canvas_width = resolved.iter().map(|s| row_width(s)).fold(0.0, f64::max);

    let mut tables_out = Vec::new();
    let mut columns = Vec::with_capacity(rows.len());
    let mut cursor_y = 0.0;

    for (i, ((y, row), shapes)) in rows.iter().zip(&resolved).enumerate() {
        if i > 0 {
            cursor_y += preset.row_gap;
        }
        let row_height = shapes.iter().map(|s| s.height).fold(0.0, f64::max);
        let mut cursor_x = (canvas_width - row_width(shapes)) / 2.0;

        for (j, (table, shape)) in row.iter().zip(shapes).enumerate() {
            if j > 0 {
                cursor_x += preset.column_gap;
            }
            tables_out.push(positioned(
                table,
                shape,
                cursor_x + shape.width / 2.0,
                cursor_y + row_height / 2.0,
            ));
            cursor_x += shape.width;
        }

        cursor_y += row_height;
        columns.push(ColumnGroup {
            key: format!("row-{}", coordinate_key(*y)),
            table_ids: row.iter().map(|t| t.id).collect(),
        });
    }

    Placement {
        units: Units::Pixel,
        canvas_width,
        canvas_height: cursor_y,
        tables: tables_out,
        columns,
    }
}
