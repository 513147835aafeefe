//! Selection handling.
//!
//! This module translates host selection events into the active shape. It
//! keeps the current color and shape-kind picks, resolves the factory for
//! the color, and rebuilds the shape whenever either pick changes.

pub mod controller;
pub mod events;

// Re-export commonly used types at module level
pub use controller::{Selection, SelectionController};
pub use events::SelectionEvent;
