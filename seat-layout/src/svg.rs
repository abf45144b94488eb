//! SVG seating chart

use std::fmt::Write;

use shared::models::TableShape;

use crate::model::{PositionedTable, RenderedLayout, Units};

/// Height of the percent canvas in SVG user units; width follows the aspect ratio
const PERCENT_VIEW_HEIGHT: f64 = 400.0;

/// Margin around pixel canvases
const MARGIN: f64 = 16.0;

const NEUTRAL_FILL: &str = "#404040";
const NEUTRAL_STROKE: &str = "#525252";
const NEUTRAL_TEXT: &str = "#d4d4d4";
const ACTIVE_FILL: &str = "#d6b25e";
const ACTIVE_STROKE: &str = "#f5d98a";
const ACTIVE_TEXT: &str = "#1c1917";

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Maps layout units onto SVG user units
struct Viewport {
    width: f64,
    height: f64,
    scale_x: f64,
    scale_y: f64,
    offset: f64,
}

impl Viewport {
    fn for_layout(layout: &RenderedLayout) -> Self {
        match layout.units {
            Units::Percent => {
                let width = PERCENT_VIEW_HEIGHT * layout.aspect_ratio;
                Self {
                    width,
                    height: PERCENT_VIEW_HEIGHT,
                    scale_x: width / 100.0,
                    scale_y: PERCENT_VIEW_HEIGHT / 100.0,
                    offset: 0.0,
                }
            }
            Units::Pixel => Self {
                width: layout.canvas_width + 2.0 * MARGIN,
                height: layout.canvas_height + 2.0 * MARGIN,
                scale_x: 1.0,
                scale_y: 1.0,
                offset: MARGIN,
            },
        }
    }
}

/// Render the chart as a standalone `<svg>` element.
///
/// The active table is drawn last so its outline is never covered.
pub fn render_svg(layout: &RenderedLayout, title: &str) -> String {
    let vp = Viewport::for_layout(layout);
    let mut svg = String::new();

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="seating-chart" viewBox="0 0 {:.2} {:.2}" role="img" aria-label="{}">"#,
        vp.width,
        vp.height,
        escape_xml(title)
    );
    let _ = write!(svg, "<title>{}</title>", escape_xml(title));

    let (active, neutral): (Vec<&PositionedTable>, Vec<&PositionedTable>) =
        layout.tables.iter().partition(|t| t.active);
    for table in neutral.into_iter().chain(active) {
        render_table(&mut svg, table, &vp);
    }

    svg.push_str("</svg>");
    svg
}

fn render_table(svg: &mut String, table: &PositionedTable, vp: &Viewport) {
    let cx = vp.offset + table.left * vp.scale_x;
    let cy = vp.offset + table.top * vp.scale_y;
    let w = table.width * vp.scale_x;
    let h = table.height * vp.scale_y;

    let (fill, stroke, text, class) = if table.active {
        (ACTIVE_FILL, ACTIVE_STROKE, ACTIVE_TEXT, "table active")
    } else {
        (NEUTRAL_FILL, NEUTRAL_STROKE, NEUTRAL_TEXT, "table")
    };
    let stroke_width = if table.active { 3.0 } else { 1.0 };

    let _ = write!(svg, r#"<g class="{class}" data-table-id="{}">"#, table.id);
    match table.shape {
        TableShape::Round => {
            let _ = write!(
                svg,
                r#"<ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{:.2}" ry="{:.2}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
                w / 2.0,
                h / 2.0
            );
        }
        TableShape::Rect => {
            let radius = (table.border_radius * vp.scale_x.min(vp.scale_y)).min(w.min(h) / 2.0);
            let _ = write!(
                svg,
                r#"<rect x="{:.2}" y="{:.2}" width="{w:.2}" height="{h:.2}" rx="{radius:.2}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
                cx - w / 2.0,
                cy - h / 2.0
            );
        }
    }

    let font_size = (w.min(h) * 0.4).clamp(8.0, 18.0);
    let _ = write!(
        svg,
        r#"<text x="{cx:.2}" y="{cy:.2}" fill="{text}" font-size="{font_size:.1}" text-anchor="middle" dominant-baseline="central">{}</text></g>"#,
        table.id
    );
}
