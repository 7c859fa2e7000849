/// ARGB colour value shared by the layout engine and its hosts.
///
/// Serialised as `#RRGGBB` (opaque) or `#AARRGGBB` strings so bar
/// descriptions stay readable in JSON.
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel colour with straight (non-premultiplied) alpha.
///
/// Equality is componentwise, alpha included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::from_rgb(0xff, 0x00, 0x00);
    pub const LIME: Color = Color::from_rgb(0x00, 0xff, 0x00);
    pub const DARK_GREEN: Color = Color::from_rgb(0x00, 0x64, 0x00);
    pub const YELLOW: Color = Color::from_rgb(0xff, 0xff, 0x00);
    pub const TRANSPARENT: Color = Color::from_argb(0x00, 0x00, 0x00, 0x00);

    /// Opaque colour from red, green and blue.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xff, r, g, b }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Linear interpolation between two colours, `t` clamped to `0..=1`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
        Color {
            a: mix(self.a, other.a),
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
            .ok_or_else(|| LayoutError::Config(format!("'{value}' is not a #RRGGBB or #AARRGGBB colour")))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
