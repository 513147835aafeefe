//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use shapepick::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red, Color::from_rgb_u8(255, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 0-255 byte components.
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the color as 0-255 byte components, ignoring alpha.
    pub fn to_rgb_u8(self) -> [u8; 3] {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

// ============================================================================
// Predefined Color Constants (standard named-color values)
// ============================================================================

pub const RED: Color = Color::from_rgb_u8(255, 0, 0);
pub const BLUE: Color = Color::from_rgb_u8(0, 0, 255);
pub const GREEN: Color = Color::from_rgb_u8(0, 128, 0);
pub const YELLOW: Color = Color::from_rgb_u8(255, 255, 0);
pub const PURPLE: Color = Color::from_rgb_u8(128, 0, 128);
pub const ORANGE: Color = Color::from_rgb_u8(255, 165, 0);
pub const PINK: Color = Color::from_rgb_u8(255, 192, 203);
pub const BROWN: Color = Color::from_rgb_u8(165, 42, 42);
pub const GRAY: Color = Color::from_rgb_u8(128, 128, 128);

/// Canvas background colors, not part of the shape palette.
pub const WHITE: Color = Color::from_rgb_u8(255, 255, 255);
pub const BLACK: Color = Color::from_rgb_u8(0, 0, 0);
