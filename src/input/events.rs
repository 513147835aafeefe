//! Selection events delivered by a host.

use crate::draw::{PaletteColor, ShapeKind};

/// A discrete user action against the selection.
///
/// Hosts that present the enumerated lists send the typed variants. Hosts
/// that only have raw text (command lines, scripts) send the `*Named`
/// variants and let the controller degrade on names it does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A palette color was picked
    ColorChanged(PaletteColor),
    /// A shape kind was picked
    ShapeKindChanged(ShapeKind),
    /// A color was picked by name
    ColorNamed(String),
    /// A shape was picked by name
    ShapeNamed(String),
    /// The shape list lost its selection
    ShapeCleared,
    /// The host's own paint cycle fired
    RedrawRequested,
}
