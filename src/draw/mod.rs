//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`PaletteColor`]: the closed set of colors a shape can take
//! - [`Shape`] and [`ShapeKind`]: fixed-geometry figures bound to a color
//! - [`Surface`]: the fill primitives a host canvas provides
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod palette;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use palette::{PaletteColor, ParseNameError};
pub use render::{RenderError, fill_background, render_frame, render_to_png};
pub use shape::{Geometry, Shape, ShapeKind};
pub use surface::{DrawCall, DrawRecorder, Surface};

pub use color::{
    BLACK, BLUE, BROWN, GRAY, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW,
};
