//! Core types for spark-matrix.
//!
//! These are the plain values that flow through the pipeline: the color a
//! cell carries and the pixel geometry the layout engine hands to the host.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A color string that none of the supported notations accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color: {0:?}")]
pub struct ColorParseError(pub String);

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Create from 0xRRGGBB integer format.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_matrix::types::Rgba;
    ///
    /// let red = Rgba::from_rgb_int(0xff0000);
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_matrix::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#ff0000"), Some(Rgba::rgb(255, 0, 0)));
    /// assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
    /// assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 128)));
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        // Short form repeats each nibble: `f` means `ff`.
        let channel = |index: usize, width: usize| -> Option<u8> {
            let slice = digits.get(index * width..(index + 1) * width)?;
            let value = u8::from_str_radix(slice, 16).ok()?;
            Some(if width == 1 { value * 0x11 } else { value })
        };

        match digits.len() {
            3 => Some(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Some(Self::rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::new(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    /// Parse CSS functional notation: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Channels are 0-255 integers; alpha is 0.0-1.0 (or a percentage).
    /// Commas and whitespace are both accepted as separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_matrix::types::Rgba;
    ///
    /// assert_eq!(
    ///     Rgba::from_css_function("rgb(173, 150, 199)"),
    ///     Some(Rgba::rgb(173, 150, 199))
    /// );
    /// assert_eq!(
    ///     Rgba::from_css_function("rgba(0, 0, 0, 0.5)"),
    ///     Some(Rgba::new(0, 0, 0, 128))
    /// );
    /// ```
    pub fn from_css_function(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        let (has_alpha, content) = if let Some(rest) = s.strip_prefix("rgba(") {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (false, rest)
        } else {
            return None;
        };
        let content = content.strip_suffix(')')?;

        let parts: Vec<&str> = content
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected && !(parts.len() == 4 && !has_alpha) {
            return None;
        }

        fn channel(p: &str) -> Option<u8> {
            let v = p.parse::<u16>().ok()?;
            u8::try_from(v).ok()
        }

        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;

        let a = match parts.get(3) {
            Some(a_str) => {
                let fraction = if let Some(pct) = a_str.strip_suffix('%') {
                    pct.parse::<f32>().ok()? / 100.0
                } else {
                    a_str.parse::<f32>().ok()?
                };
                if fraction.is_nan() {
                    return None;
                }
                (fraction.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            None => 255,
        };

        Some(Self::new(r, g, b, a))
    }

    /// Look up a basic CSS color keyword.
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "lime" => Self::LIME,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" | "aqua" => Self::CYAN,
            "magenta" | "fuchsia" => Self::MAGENTA,
            "gray" | "grey" => Self::GRAY,
            "silver" => Self::rgb(192, 192, 192),
            "maroon" => Self::rgb(128, 0, 0),
            "navy" => Self::rgb(0, 0, 128),
            "olive" => Self::rgb(128, 128, 0),
            "purple" => Self::rgb(128, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            _ => return None,
        };
        Some(color)
    }

    /// Parse any supported color format.
    ///
    /// Supports hex (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), `rgb()`/`rgba()` and
    /// the basic CSS keywords.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_matrix::types::Rgba;
    ///
    /// assert_eq!(Rgba::parse("red"), Some(Rgba::RED));
    /// assert_eq!(Rgba::parse("#0000ff"), Some(Rgba::BLUE));
    /// assert_eq!(Rgba::parse("rgb(123, 108, 255)"), Some(Rgba::rgb(123, 108, 255)));
    /// assert!(Rgba::parse("invalid-color").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(color) = Self::named(input) {
            return Some(color);
        }

        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        let lower = input.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return Self::from_css_function(input);
        }

        None
    }
}

impl fmt::Display for Rgba {
    /// CSS notation, the same form the parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = f32::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
        }
    }
}

impl std::str::FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Top-left corner of an element, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub left: u32,
    pub top: u32,
}

impl Point {
    pub const fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }
}

/// Box size of the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    /// The degenerate canvas of an empty matrix.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either side is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
