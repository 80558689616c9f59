//! # Color Components
//!
//! The RGBA value type shared by the token layer and the color engine.
//!
//! Channels are stored as `f64`: red, green and blue in `0.0..=255.0`, alpha
//! in `0.0..=1.0`. Values are never mutated in place; every operation returns
//! a new color.
//!
//! ```rust
//! use bezier_theme::color::ColorComponents;
//!
//! let blue = ColorComponents::from_hex("#3b82f6").unwrap();
//! assert_eq!(blue, ColorComponents::rgb(59.0, 130.0, 246.0));
//! assert_eq!(blue.hsl().lightness, 60);
//! ```

use std::fmt;

use crate::color_utils;
use crate::error::{ThemeError, ThemeResult};

/// An RGBA color with fractional channels.
///
/// Equality is exact component-wise `f64` equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorComponents {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// Integer HSL triple derived from a color.
///
/// Hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`. Only meaningful for in-range channel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue angle in whole degrees.
    pub hue: i32,
    /// Saturation in whole percent.
    pub saturation: i32,
    /// Lightness in whole percent.
    pub lightness: i32,
}

impl Hsl {
    /// Whether the color is a shade of gray.
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0
    }
}

impl ColorComponents {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from raw channel values.
    ///
    /// No validation happens here; see [ColorComponents::sanitized].
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color.
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from 8-bit channels. Alpha `255` maps to `1.0`.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            f64::from(red),
            f64::from(green),
            f64::from(blue),
            f64::from(alpha) / 255.0,
        )
    }

    /// Parse a hex color string with optional alpha channel.
    ///
    /// Supports `#rrggbb` and `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> ThemeResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ThemeError::InvalidColor(format!(
                "Hex color must be 6 or 8 characters: {}",
                hex
            )));
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ThemeError::InvalidColor(hex.to_string()))
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 255 };
        Ok(Self::from_rgba8(r, g, b, a))
    }

    /// Red channel, nominally `0.0..=255.0`.
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Green channel, nominally `0.0..=255.0`.
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel, nominally `0.0..=255.0`.
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Alpha channel, nominally `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Return a copy with the given alpha value.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Integer HSL representation of the RGB channels.
    pub fn hsl(&self) -> Hsl {
        color_utils::rgb_to_hsl(self.red, self.green, self.blue)
    }

    /// Whether the color has zero saturation.
    pub fn is_achromatic(&self) -> bool {
        self.hsl().is_achromatic()
    }

    /// Bring every channel into its declared range.
    ///
    /// NaN becomes `0.0`; red, green and blue clamp to `0.0..=255.0` and alpha
    /// clamps to `0.0..=1.0`. In-range colors are returned unchanged.
    pub fn sanitized(self) -> Self {
        Self {
            red: clamp_channel(self.red, 255.0),
            green: clamp_channel(self.green, 255.0),
            blue: clamp_channel(self.blue, 255.0),
            alpha: clamp_channel(self.alpha, 1.0),
        }
    }

    /// Whether every channel already lies in its declared range.
    pub fn is_sanitized(&self) -> bool {
        self.sanitized() == *self
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let r = to_u8(self.red);
        let g = to_u8(self.green);
        let b = to_u8(self.blue);
        let a = to_u8(self.alpha * 255.0);
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl Default for ColorComponents {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for ColorComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "vello")]
impl From<ColorComponents> for vello::peniko::Color {
    fn from(color: ColorComponents) -> Self {
        let color = color.sanitized();
        vello::peniko::Color::new([
            (color.red / 255.0) as f32,
            (color.green / 255.0) as f32,
            (color.blue / 255.0) as f32,
            color.alpha as f32,
        ])
    }
}

fn clamp_channel(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

fn to_u8(value: f64) -> u8 {
    clamp_channel(value.round(), 255.0) as u8
}
