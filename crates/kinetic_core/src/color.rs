//! Color and shadow primitives
//!
//! Colors are stored as normalized RGBA floats so they can be interpolated,
//! and serialize as `#RRGGBB` (or `#RRGGBBAA` when translucent).

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input.trim().trim_start_matches('#');
        let err = || ParseColorError(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                let expand = |nibble: u32| (nibble << 4 | nibble) as f32 / 255.0;
                Ok(Self::rgb(
                    expand((value >> 8) & 0xF),
                    expand((value >> 4) & 0xF),
                    expand(value & 0xF),
                ))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                Ok(Self::from_hex(value))
            }
            8 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0))
            }
            _ => Err(err()),
        }
    }

    fn channel(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )?;
        if Self::channel(self.a) != 255 {
            write!(f, "{:02X}", Self::channel(self.a))?;
        }
        Ok(())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value)
    }
}

/// Returned when a hex color literal cannot be parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

/// Drop shadow configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }
}
