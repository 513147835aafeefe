//! Configuration enum types.

use crate::draw::{BLACK, Color, PaletteColor, WHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Custom RGB color (0-255 per component)
/// background = [240, 240, 240]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: any palette color, plus white and black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names default to white with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb_u8(*r, *g, *b),
        }
    }
}

/// Maps a background color name to a color (case-insensitive).
fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        other => PaletteColor::from_name(other).map(PaletteColor::rgba),
    }
}
