// RGBA color with f64 channels in the 0..=255 convention.
// Channels are not clamped by arithmetic (lerp may leave the range);
// clamping happens once, when a color is written into an 8-bit buffer.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Fully transparent black.
    #[allow(dead_code)]
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(255.0, 255.0, 255.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha 255).
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 255.0)
    }

    /// Same RGB, alpha forced to 0.
    #[inline]
    pub fn transparent(self) -> Self {
        Self { a: 0.0, ..self }
    }

    /// `#rrggbb`, lowercase. Alpha is not part of the string.
    pub fn hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }

    /// Parse `#rrggbb` / `rrggbb` (surrounding whitespace ignored) with the given alpha.
    pub fn from_hex(hex: &str, alpha: f64) -> Result<Self, Error> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(f64::from)
                .map_err(|_| Error::InvalidHex(hex.to_string()))
        };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// `(1 - t) * a + t * b` on all four channels; `t` is not clamped.
    #[inline]
    pub fn lerp(a: Color, b: Color, t: f64) -> Color {
        let it = 1.0 - t;
        Color::rgba(
            it * a.r + t * b.r,
            it * a.g + t * b.g,
            it * a.b + t * b.b,
            it * a.a + t * b.a,
        )
    }

    /// Channels as stored in an 8-bit RGBA buffer.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

/// 8-bit write policy: NaN -> 0, clamp to [0,255], round half to even.
#[inline]
pub fn quantize(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}
