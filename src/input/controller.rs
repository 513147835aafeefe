//! Selection state and the controller that turns it into a shape.

use super::events::SelectionEvent;
use crate::draw::{PaletteColor, Shape, ShapeKind, Surface};
use crate::factory::ShapeFactory;
use crate::util::Rect;
use log::{debug, warn};

#[cfg(test)]
mod tests;

/// The user's current picks along both axes.
///
/// Transitions are pure: each returns the new selection and leaves the old
/// one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Active palette color
    pub color: PaletteColor,
    /// Active shape kind; `None` when the shape list has no selection
    pub kind: Option<ShapeKind>,
}

impl Selection {
    /// Startup selection: first palette color, first shape kind.
    pub fn initial() -> Self {
        Self {
            color: PaletteColor::ALL[0],
            kind: Some(ShapeKind::ALL[0]),
        }
    }

    pub fn with_color(self, color: PaletteColor) -> Self {
        Self { color, ..self }
    }

    pub fn with_kind(self, kind: ShapeKind) -> Self {
        Self {
            kind: Some(kind),
            ..self
        }
    }

    pub fn without_kind(self) -> Self {
        Self { kind: None, ..self }
    }
}

/// Resolves the active shape from a factory and a kind.
///
/// Either half missing means nothing is drawn.
fn resolve_shape(factory: Option<ShapeFactory>, kind: Option<ShapeKind>) -> Option<Shape> {
    Some(factory?.create(kind?))
}

/// Owns the selection and the single shape derived from it.
///
/// All mutation happens through the `on_*` handlers, which complete the
/// factory and shape re-resolution before returning. `needs_redraw` is set
/// by every handler and cleared by [`SelectionController::render`].
#[derive(Debug)]
pub struct SelectionController {
    selection: Selection,
    factory: Option<ShapeFactory>,
    shape: Option<Shape>,
    /// Whether the host should repaint
    pub needs_redraw: bool,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Creates a controller with the startup selection fully resolved.
    pub fn new() -> Self {
        Self::from_selection(Selection::initial())
    }

    /// Creates a controller for `selection`, resolving factory and shape once.
    pub fn from_selection(selection: Selection) -> Self {
        let factory = Some(ShapeFactory::for_color(selection.color));
        let shape = resolve_shape(factory, selection.kind);
        debug!(
            "Selection initialized: color={}, shape={:?}",
            selection.color, selection.kind
        );
        Self {
            selection,
            factory,
            shape,
            needs_redraw: true,
        }
    }

    /// Creates a controller before any selection has been made.
    ///
    /// No factory is resolved and no kind is selected, so rendering draws
    /// nothing until the first selection event arrives.
    pub fn unresolved() -> Self {
        Self {
            selection: Selection::default().without_kind(),
            factory: None,
            shape: None,
            needs_redraw: false,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn factory(&self) -> Option<ShapeFactory> {
        self.factory
    }

    /// The shape that will be drawn on the next render, if any.
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Area the next render paints, or `None` when nothing will be drawn.
    pub fn damage_region(&self) -> Option<Rect> {
        self.shape.as_ref().and_then(Shape::bounding_box)
    }

    /// Switches to `color`, re-resolving the factory and the shape.
    pub fn on_color_changed(&mut self, color: PaletteColor) {
        self.selection = self.selection.with_color(color);
        self.factory = Some(ShapeFactory::for_color(color));
        self.refresh_shape();
        debug!("Color changed to {}", color);
    }

    /// Switches to `kind`, keeping the current factory.
    pub fn on_shape_kind_changed(&mut self, kind: ShapeKind) {
        self.selection = self.selection.with_kind(kind);
        self.refresh_shape();
        debug!("Shape changed to {}", kind);
    }

    /// Handles a color picked by name.
    ///
    /// An unknown name keeps the previous color and factory; the shape is
    /// still rebuilt and a redraw requested.
    pub fn on_color_selected(&mut self, name: &str) {
        match PaletteColor::from_name(name) {
            Some(color) => self.on_color_changed(color),
            None => {
                warn!("Unknown color '{}', keeping {}", name, self.selection.color);
                self.refresh_shape();
            }
        }
    }

    /// Handles a shape picked by name.
    ///
    /// An unknown name clears the shape so nothing is drawn.
    pub fn on_shape_selected(&mut self, name: &str) {
        match ShapeKind::from_name(name) {
            Some(kind) => self.on_shape_kind_changed(kind),
            None => {
                warn!("Unknown shape '{}', nothing will be drawn", name);
                self.clear_shape_selection();
            }
        }
    }

    /// Drops the shape-kind selection; nothing is drawn until a new one.
    pub fn clear_shape_selection(&mut self) {
        self.selection = self.selection.without_kind();
        self.refresh_shape();
        debug!("Shape selection cleared");
    }

    /// Dispatches one event.
    pub fn handle_event(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::ColorChanged(color) => self.on_color_changed(*color),
            SelectionEvent::ShapeKindChanged(kind) => self.on_shape_kind_changed(*kind),
            SelectionEvent::ColorNamed(name) => self.on_color_selected(name),
            SelectionEvent::ShapeNamed(name) => self.on_shape_selected(name),
            SelectionEvent::ShapeCleared => self.clear_shape_selection(),
            SelectionEvent::RedrawRequested => self.needs_redraw = true,
        }
    }

    /// Dispatches events strictly in order, each one fully applied before
    /// the next.
    pub fn handle_events<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a SelectionEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
    }

    /// Draws the active shape, or nothing when the selection is unresolved.
    ///
    /// Returns true if a shape was drawn.
    pub fn render(&mut self, surface: &mut dyn Surface) -> bool {
        self.needs_redraw = false;
        match &self.shape {
            Some(shape) => {
                shape.render(surface);
                true
            }
            None => {
                debug!("No shape selected, skipping draw");
                false
            }
        }
    }

    fn refresh_shape(&mut self) {
        self.shape = resolve_shape(self.factory, self.selection.kind);
        self.needs_redraw = true;
    }
}
