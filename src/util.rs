//! Geometry helpers shared by shapes and surfaces.
//!
//! This module provides:
//! - [`Point`] and [`Rect`] in surface-local units
//! - Ellipse parameters derived from a bounding box
//! - Bounding boxes for vertex lists

// ============================================================================
// Points
// ============================================================================

/// A vertex in surface-local units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle, inclusive min and exclusive max.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Right edge (exclusive).
    pub fn max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn max_y(&self) -> i32 {
        self.y + self.height
    }

}

/// Calculates ellipse parameters inscribed in a bounding box.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)` where:
/// - `cx`, `cy` = center point coordinates
/// - `rx` = horizontal radius (half width)
/// - `ry` = vertical radius (half height)
pub fn ellipse_in(bounds: Rect) -> (f64, f64, f64, f64) {
    let rx = bounds.width as f64 / 2.0;
    let ry = bounds.height as f64 / 2.0;
    (bounds.x as f64 + rx, bounds.y as f64 + ry, rx, ry)
}

/// Returns the smallest rectangle covering every vertex.
///
/// Returns `None` for an empty list or a degenerate (zero-area) vertex set.
pub fn bounding_box_for_points(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for point in &points[1..] {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
