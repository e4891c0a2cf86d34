//! Color parsing and distance helpers

use crate::{Error, Result};

/// An sRGB color with 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. Hex digits are case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColorFormat(hex.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColorFormat(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space (0.0 ..= ~441.67).
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Convert unit-float channels (as reported by the design tool) to `#rrggbb`.
pub fn rgba_to_hex(r: f64, g: f64, b: f64) -> String {
    let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r), to_u8(g), to_u8(b)).to_hex()
}

/// Normalize a computed-style color (`rgb(..)`, `rgba(..)` or hex) to `#rrggbb`.
///
/// Returns `None` when the value is not one of those forms.
pub fn css_color_to_hex(value: &str) -> Option<String> {
    let value = value.trim();
    if value.starts_with('#') {
        return Rgb::from_hex(value).ok().map(Rgb::to_hex);
    }

    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut parts = inner.split(',').map(str::trim);
    let mut channel = || -> Option<u8> {
        let n: f64 = parts.next()?.parse().ok()?;
        Some(n.round().clamp(0.0, 255.0) as u8)
    };
    let (r, g, b) = (channel()?, channel()?, channel()?);
    Some(Rgb::new(r, g, b).to_hex())
}
