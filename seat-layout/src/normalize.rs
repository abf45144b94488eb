//! Layout Normalizer
//!
//! Fits a set of center-anchored percent boxes onto the 100×100 canvas.
//!
//! The union of all boxes is scaled to occupy at most `safe_percent` of the
//! canvas and then centered. Scale never exceeds 1: a layout that already fits
//! is only moved, never magnified. An axis with zero span keeps scale 1.
//!
//! Overlapping boxes are separated beforehand by shifting positions along the
//! axis of least penetration. Whatever the pairwise passes leave behind is
//! settled by a left-to-right sweep along X, so the result is always
//! overlap-free. Widths and heights are never shrunk to make room.

use shared::models::RenderBox;

/// Canvas extent in percent
pub const CANVAS: f64 = 100.0;

/// Occupied share of the canvas for free-form layouts
pub const SAFE_PERCENT: f64 = 90.0;

/// Occupied share of the canvas for U-shape layouts
pub const U_SHAPE_SAFE_PERCENT: f64 = 92.0;

/// Horizontal target for wide U-shape compression
pub const WIDE_U_SAFE_PERCENT: f64 = 96.0;

/// Upper bound on overlap resolution passes
pub const MAX_OVERLAP_PASSES: usize = 64;

const EPSILON: f64 = 1e-6;

/// Axis-aligned extent of a set of boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Union of all boxes; `None` for an empty slice
    pub fn of(boxes: &[RenderBox]) -> Option<Self> {
        let first = boxes.first()?;
        let init = Self {
            min_x: first.min_x(),
            max_x: first.max_x(),
            min_y: first.min_y(),
            max_y: first.max_y(),
        };
        Some(boxes.iter().skip(1).fold(init, |b, r| Self {
            min_x: b.min_x.min(r.min_x()),
            max_x: b.max_x.max(r.max_x()),
            min_y: b.min_y.min(r.min_y()),
            max_y: b.max_y.max(r.max_y()),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn fits_x(&self) -> bool {
        self.min_x >= -EPSILON && self.max_x <= CANVAS + EPSILON
    }

    pub fn fits_y(&self) -> bool {
        self.min_y >= -EPSILON && self.max_y <= CANVAS + EPSILON
    }
}

/// Affine per-axis transform: `new = old * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Normalization {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform one box; sizes follow the scale of their axis
    pub fn apply(&self, b: &mut RenderBox) {
        b.left_percent = b.left_percent * self.scale_x + self.offset_x;
        b.width_percent *= self.scale_x;
        b.top_percent = b.top_percent * self.scale_y + self.offset_y;
        b.height_percent *= self.scale_y;
    }
}

/// Which axes overlap resolution may move boxes along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axes {
    Both,
    HorizontalOnly,
}

/// Scale for one axis: fit `span` into `safe_percent`, never above 1
fn axis_scale(span: f64, safe_percent: f64) -> f64 {
    if span > EPSILON {
        (safe_percent / span).min(1.0)
    } else {
        1.0
    }
}

/// Offset that centers `[min, min + span]` scaled by `scale`
fn axis_offset(min: f64, span: f64, scale: f64) -> f64 {
    (CANVAS - span * scale) / 2.0 - min * scale
}

/// Uniform fit: one scale shared by both axes
pub fn fit_uniform(boxes: &[RenderBox], safe_percent: f64) -> Normalization {
    let Some(b) = Bounds::of(boxes) else {
        return Normalization::IDENTITY;
    };

    let scale = axis_scale(b.width(), safe_percent).min(axis_scale(b.height(), safe_percent));
    Normalization {
        scale_x: scale,
        scale_y: scale,
        offset_x: axis_offset(b.min_x, b.width(), scale),
        offset_y: axis_offset(b.min_y, b.height(), scale),
    }
}

/// Asymmetric fit used by wide U-shape layouts.
///
/// X is compressed only when the horizontal span exceeds the canvas, and merely
/// re-centered when it fits in width but pokes past an edge. Y is left alone
/// unless it escapes the canvas.
pub fn fit_horizontal(boxes: &[RenderBox], safe_percent: f64) -> Normalization {
    let Some(b) = Bounds::of(boxes) else {
        return Normalization::IDENTITY;
    };

    let mut n = Normalization::IDENTITY;

    if b.width() > CANVAS {
        n.scale_x = safe_percent / b.width();
        n.offset_x = axis_offset(b.min_x, b.width(), n.scale_x);
    } else if !b.fits_x() {
        n.offset_x = axis_offset(b.min_x, b.width(), 1.0);
    }

    if !b.fits_y() {
        n.scale_y = axis_scale(b.height(), safe_percent);
        n.offset_y = axis_offset(b.min_y, b.height(), n.scale_y);
    }

    n
}

/// Push overlapping boxes apart. The set is overlap-free on return.
///
/// Each overlapping pair is separated along the axis with the smaller
/// penetration depth, both boxes moving half the depth. If that has not
/// settled within [`MAX_OVERLAP_PASSES`], [`sweep_x`] finishes the job.
/// Returns `true` when the pairwise passes alone were enough.
pub fn resolve_overlaps(boxes: &mut [RenderBox], axes: Axes) -> bool {
    for _ in 0..MAX_OVERLAP_PASSES {
        let mut moved = false;

        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                let (a, b) = (boxes[i], boxes[j]);
                let dx = b.left_percent - a.left_percent;
                let dy = b.top_percent - a.top_percent;
                let px = (a.width_percent + b.width_percent) / 2.0 - dx.abs();
                let py = penetration_y(&a, &b);
                if px <= EPSILON || py <= EPSILON {
                    continue;
                }

                let along_x = match axes {
                    Axes::HorizontalOnly => true,
                    Axes::Both => px <= py,
                };
                if along_x {
                    let dir = if dx >= 0.0 { 1.0 } else { -1.0 };
                    boxes[i].left_percent -= dir * px / 2.0;
                    boxes[j].left_percent += dir * px / 2.0;
                } else {
                    let dir = if dy >= 0.0 { 1.0 } else { -1.0 };
                    boxes[i].top_percent -= dir * py / 2.0;
                    boxes[j].top_percent += dir * py / 2.0;
                }
                moved = true;
            }
        }

        if !moved {
            return true;
        }
    }

    let swept = sweep_x(boxes);
    tracing::debug!(
        tables = boxes.len(),
        swept,
        "Overlap passes did not settle, separated by sweep"
    );
    false
}

/// Overlap along Y, as penetration depth (`<= 0` when apart)
fn penetration_y(a: &RenderBox, b: &RenderBox) -> f64 {
    (a.height_percent + b.height_percent) / 2.0 - (b.top_percent - a.top_percent).abs()
}

/// Exact separation along X.
///
/// Boxes are visited by center (ties in input order); each one is moved right
/// until it clears every earlier box it shares vertical extent with. Visited
/// boxes never move again, so no pair is left overlapping. Y is untouched.
/// Returns the number of boxes moved.
pub fn sweep_x(boxes: &mut [RenderBox]) -> usize {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| boxes[a].left_percent.total_cmp(&boxes[b].left_percent));

    let mut moved = 0;
    for (k, &i) in order.iter().enumerate() {
        let current = boxes[i];
        let left = order[..k]
            .iter()
            .map(|&j| &boxes[j])
            .filter(|placed| penetration_y(placed, &current) > EPSILON)
            .map(|placed| placed.left_percent + (placed.width_percent + current.width_percent) / 2.0)
            .fold(current.left_percent, f64::max);

        if left > current.left_percent {
            boxes[i].left_percent = left;
            moved += 1;
        }
    }
    moved
}

/// Pull any box still poking past an edge back inside the canvas
pub fn clamp_to_canvas(boxes: &mut [RenderBox], axes: Axes) {
    for b in boxes.iter_mut() {
        b.width_percent = b.width_percent.min(CANVAS);
        b.left_percent = b
            .left_percent
            .clamp(b.width_percent / 2.0, CANVAS - b.width_percent / 2.0);

        if axes == Axes::Both {
            b.height_percent = b.height_percent.min(CANVAS);
            b.top_percent = b
                .top_percent
                .clamp(b.height_percent / 2.0, CANVAS - b.height_percent / 2.0);
        }
    }
}

/// Resolve overlaps, fit uniformly into `safe_percent`, clamp. No-op on empty input.
pub fn normalize(boxes: &mut [RenderBox], safe_percent: f64) -> Normalization {
    if boxes.is_empty() {
        return Normalization::IDENTITY;
    }

    resolve_overlaps(boxes, Axes::Both);
    let n = fit_uniform(boxes, safe_percent);
    boxes.iter_mut().for_each(|b| n.apply(b));
    clamp_to_canvas(boxes, Axes::Both);
    n
}

/// Wide U-shape variant of [`normalize`]: X-only overlap resolution and compression
pub fn normalize_horizontal(boxes: &mut [RenderBox], safe_percent: f64) -> Normalization {
    if boxes.is_empty() {
        return Normalization::IDENTITY;
    }

    resolve_overlaps(boxes, Axes::HorizontalOnly);
    let n = fit_horizontal(boxes, safe_percent);
    boxes.iter_mut().for_each(|b| n.apply(b));
    let axes = if n.scale_y == 1.0 && n.offset_y == 0.0 {
        Axes::HorizontalOnly
    } else {
        Axes::Both
    };
    clamp_to_canvas(boxes, axes);
    n
}
