//! The closed set of palette colors a shape can be drawn in.

use super::color::{self, Color};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named palette entry. Each entry owns exactly one shape factory.
///
/// Declaration order is the presentation order; the first entry is the
/// startup default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Brown,
    Gray,
}

/// Returned when a free-form name matches no entry of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what} '{name}'")]
pub struct ParseNameError {
    pub what: &'static str,
    pub name: String,
}

impl PaletteColor {
    /// All palette entries in presentation order.
    pub const ALL: [PaletteColor; 9] = [
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Orange,
        PaletteColor::Pink,
        PaletteColor::Brown,
        PaletteColor::Gray,
    ];

    /// Display name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Brown => "Brown",
            Self::Gray => "Gray",
        }
    }

    /// Fill color used when rendering.
    pub fn rgba(self) -> Color {
        match self {
            Self::Red => color::RED,
            Self::Blue => color::BLUE,
            Self::Green => color::GREEN,
            Self::Yellow => color::YELLOW,
            Self::Purple => color::PURPLE,
            Self::Orange => color::ORANGE,
            Self::Pink => color::PINK,
            Self::Brown => color::BROWN,
            Self::Gray => color::GRAY,
        }
    }

    /// Maps a color name to a palette entry.
    ///
    /// Case-insensitive; "grey" is accepted for [`PaletteColor::Gray`].
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("grey") {
            return Some(Self::Gray);
        }
        Self::ALL
            .into_iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseNameError {
            what: "color",
            name: s.to_string(),
        })
    }
}
