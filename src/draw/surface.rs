//! Drawing surface abstraction.
//!
//! Shapes only ever write to a surface through the three fill primitives
//! below. The Cairo implementation lives in [`super::render`]; the
//! [`DrawRecorder`] captures calls instead of painting them.

use super::color::Color;
use crate::util::{Point, Rect};
use std::fmt;

/// Primitive fill operations a host canvas provides.
///
/// Implementations are borrowed for a single paint call and must not be
/// retained by the caller.
pub trait Surface {
    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);
    /// Fills the axis-aligned rectangle `bounds`.
    fn fill_rect(&mut self, bounds: Rect, color: Color);
    /// Fills the polygon through `points` in order, closing back to the first.
    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// One recorded fill operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Ellipse { bounds: Rect, color: Color },
    Rect { bounds: Rect, color: Color },
    Polygon { points: Vec<Point>, color: Color },
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb = |c: &Color| {
            let [r, g, b] = c.to_rgb_u8();
            format!("#{r:02x}{g:02x}{b:02x}")
        };
        match self {
            DrawCall::Ellipse { bounds, color } => write!(
                f,
                "fill_ellipse ({},{})-({},{}) {}",
                bounds.x,
                bounds.y,
                bounds.max_x(),
                bounds.max_y(),
                rgb(color)
            ),
            DrawCall::Rect { bounds, color } => write!(
                f,
                "fill_rect ({},{})-({},{}) {}",
                bounds.x,
                bounds.y,
                bounds.max_x(),
                bounds.max_y(),
                rgb(color)
            ),
            DrawCall::Polygon { points, color } => {
                write!(f, "fill_polygon")?;
                for point in points {
                    write!(f, " ({},{})", point.x, point.y)?;
                }
                write!(f, " {}", rgb(color))
            }
        }
    }
}

/// Surface that records every fill call in order.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Removes and returns all recorded calls.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for DrawRecorder {
    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.calls.push(DrawCall::Ellipse { bounds, color });
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.calls.push(DrawCall::Rect { bounds, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn recorder_keeps_call_order() {
        let bounds = Rect::new(0, 0, 10, 10).unwrap();
        let mut recorder = DrawRecorder::new();
        recorder.fill_rect(bounds, RED);
        recorder.fill_ellipse(bounds, BLUE);

        let calls = recorder.take();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], DrawCall::Rect { .. }));
        assert!(matches!(calls[1], DrawCall::Ellipse { .. }));
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn draw_calls_format_as_trace_lines() {
        let call = DrawCall::Polygon {
            points: vec![Point::new(1, 2), Point::new(3, 4)],
            color: BLUE,
        };
        assert_eq!(call.to_string(), "fill_polygon (1,2) (3,4) #0000ff");

        let call = DrawCall::Rect {
            bounds: Rect::new(150, 150, 100, 100).unwrap(),
            color: RED,
        };
        assert_eq!(call.to_string(), "fill_rect (150,150)-(250,250) #ff0000");
    }
}
