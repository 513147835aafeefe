//! Color-bound shape factories.
//!
//! Every palette color owns one factory. A factory is just the color it is
//! bound to; all factories share the same dispatch over [`ShapeKind`], so
//! creating one costs nothing and it can be rebuilt on every selection change.

use crate::draw::{PaletteColor, Shape, ShapeKind};

/// Builds a shape of `kind` in `color`.
///
/// Every factory method funnels through here.
pub fn make_shape(color: PaletteColor, kind: ShapeKind) -> Shape {
    Shape::new(kind, color)
}

/// Produces shapes pre-bound to one palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeFactory {
    color: PaletteColor,
}

impl ShapeFactory {
    /// Returns the factory owned by `color`.
    pub const fn for_color(color: PaletteColor) -> Self {
        Self { color }
    }

    /// Resolves a free-form color name to its factory.
    ///
    /// Returns `None` when the name is not a palette entry.
    pub fn lookup(name: &str) -> Option<Self> {
        PaletteColor::from_name(name).map(Self::for_color)
    }

    /// One factory per palette entry, in palette order.
    pub fn all() -> impl Iterator<Item = ShapeFactory> {
        PaletteColor::ALL.into_iter().map(Self::for_color)
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn create(&self, kind: ShapeKind) -> Shape {
        make_shape(self.color, kind)
    }

    pub fn create_circle(&self) -> Shape {
        self.create(ShapeKind::Circle)
    }

    pub fn create_square(&self) -> Shape {
        self.create(ShapeKind::Square)
    }

    pub fn create_triangle(&self) -> Shape {
        self.create(ShapeKind::Triangle)
    }
}

impl From<PaletteColor> for ShapeFactory {
    fn from(color: PaletteColor) -> Self {
        Self::for_color(color)
    }
}
