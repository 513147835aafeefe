//! Library exports for shapepick.
//!
//! Shapes are produced by color-bound factories: pick a palette color to get
//! its [`factory::ShapeFactory`], then ask that factory for a shape kind. The
//! [`input::SelectionController`] keeps both picks and the single shape they
//! resolve to, and draws it onto any [`draw::Surface`].

pub mod config;
pub mod draw;
pub mod factory;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use draw::{PaletteColor, Shape, ShapeKind, Surface};
pub use factory::ShapeFactory;
pub use input::{SelectionController, SelectionEvent};
