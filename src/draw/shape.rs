//! Shape kinds, their fixed geometry, and the shape value itself.

use super::palette::{PaletteColor, ParseNameError};
use super::surface::Surface;
use crate::util::{self, Point, Rect};
use std::fmt;
use std::str::FromStr;

/// Bounding box of the circle, in surface-local units.
pub const CIRCLE_BOUNDS: Rect = Rect {
    x: 150,
    y: 150,
    width: 100,
    height: 100,
};

/// Extent of the square.
pub const SQUARE_BOUNDS: Rect = Rect {
    x: 150,
    y: 150,
    width: 100,
    height: 100,
};

/// Triangle vertices: apex first, then bottom-left and bottom-right.
pub const TRIANGLE_VERTICES: [Point; 3] = [
    Point::new(200, 150),
    Point::new(150, 250),
    Point::new(250, 250),
];

/// The geometric category of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
    Triangle,
}

/// Fixed geometry of a shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Ellipse inscribed in a bounding box
    Ellipse(Rect),
    /// Axis-aligned filled rectangle
    Rectangle(Rect),
    /// Closed polygon through the vertices
    Polygon([Point; 3]),
}

impl ShapeKind {
    /// All shape kinds in presentation order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Display name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
        }
    }

    /// Maps a shape name to a kind (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// The hard-coded geometry drawn for this kind.
    pub fn geometry(self) -> Geometry {
        match self {
            Self::Circle => Geometry::Ellipse(CIRCLE_BOUNDS),
            Self::Square => Geometry::Rectangle(SQUARE_BOUNDS),
            Self::Triangle => Geometry::Polygon(TRIANGLE_VERTICES),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseNameError {
            what: "shape",
            name: s.to_string(),
        })
    }
}

/// A drawable figure bound to a palette color.
///
/// Shapes are only built by a [`crate::factory::ShapeFactory`], so a shape's
/// color is always the color of the factory that produced it. They are never
/// edited; a selection change builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    color: PaletteColor,
}

impl Shape {
    pub(crate) fn new(kind: ShapeKind, color: PaletteColor) -> Self {
        Self { kind, color }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn geometry(&self) -> Geometry {
        self.kind.geometry()
    }

    /// Area covered by the shape, suitable for damage hints.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self.geometry() {
            Geometry::Ellipse(bounds) | Geometry::Rectangle(bounds) => Some(bounds),
            Geometry::Polygon(points) => util::bounding_box_for_points(&points),
        }
    }

    /// Paints the shape's geometry filled with its color.
    ///
    /// Issues exactly one fill call on `surface`.
    pub fn render(&self, surface: &mut dyn Surface) {
        let fill = self.color.rgba();
        match self.geometry() {
            Geometry::Ellipse(bounds) => surface.fill_ellipse(bounds, fill),
            Geometry::Rectangle(bounds) => surface.fill_rect(bounds, fill),
            Geometry::Polygon(points) => surface.fill_polygon(&points, fill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{DrawCall, DrawRecorder};
    use crate::draw::{BLUE, GREEN, RED};

    #[test]
    fn circle_renders_single_ellipse() {
        let mut recorder = DrawRecorder::new();
        Shape::new(ShapeKind::Circle, PaletteColor::Red).render(&mut recorder);

        assert_eq!(
            recorder.calls(),
            &[DrawCall::Ellipse {
                bounds: CIRCLE_BOUNDS,
                color: RED
            }]
        );
    }

    #[test]
    fn square_renders_single_rect() {
        let mut recorder = DrawRecorder::new();
        Shape::new(ShapeKind::Square, PaletteColor::Blue).render(&mut recorder);

        assert_eq!(
            recorder.calls(),
            &[DrawCall::Rect {
                bounds: SQUARE_BOUNDS,
                color: BLUE
            }]
        );
    }

    #[test]
    fn triangle_renders_vertices_in_order() {
        let mut recorder = DrawRecorder::new();
        Shape::new(ShapeKind::Triangle, PaletteColor::Green).render(&mut recorder);

        assert_eq!(
            recorder.calls(),
            &[DrawCall::Polygon {
                points: vec![
                    Point::new(200, 150),
                    Point::new(150, 250),
                    Point::new(250, 250)
                ],
                color: GREEN
            }]
        );
    }

    #[test]
    fn all_kinds_share_the_same_footprint() {
        let expected = Rect::from_min_max(150, 150, 250, 250);
        for kind in ShapeKind::ALL {
            let shape = Shape::new(kind, PaletteColor::Gray);
            assert_eq!(shape.bounding_box(), expected, "{kind} footprint");
        }
    }

    #[test]
    fn kind_names_parse() {
        assert_eq!("triangle".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
        assert_eq!(ShapeKind::from_name("Hexagon"), None);
        assert_eq!(ShapeKind::ALL[0], ShapeKind::default());
    }
}
