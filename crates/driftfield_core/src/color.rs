//! Color types shared by the simulation and the renderers.
//!
//! Particle colors arrive as CSS-style strings from configuration; band
//! color stops are static RGBA tables.

use thiserror::Error;

/// Errors produced while parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string was empty (after trimming).
    #[error("empty color string")]
    Empty,

    /// A `#` color with a digit count other than 3 or 6.
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    HexLength(usize),

    /// A character that is not a hex digit.
    #[error("invalid hex digit in color: {0}")]
    HexDigit(String),

    /// An `rgb(...)` form that could not be parsed.
    #[error("invalid rgb() color: {0}")]
    Functional(String),

    /// Neither `#...` nor `rgb(...)`.
    #[error("unsupported color format: {0}")]
    Unsupported(String),
}

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Dark green, the default particle color (`#1a6b3a`).
    pub const FOREST: Self = Self::new(0x1a, 0x6b, 0x3a);

    /// Creates a color from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Adds an alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// Parses `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing why the string was rejected.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(digits) = s.strip_prefix('#') {
            return Self::parse_hex(digits);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
            return Self::parse_functional(body).ok_or_else(|| ColorError::Functional(s.to_owned()));
        }

        Err(ColorError::Unsupported(s.to_owned()))
    }

    fn parse_hex(digits: &str) -> Result<Self, ColorError> {
        if digits.is_empty() {
            return Err(ColorError::HexLength(0));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::HexDigit(digits.to_owned()));
        }
        if digits.len() > 8 {
            return Err(ColorError::HexLength(digits.len()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::HexDigit(digits.to_owned()))?;

        match digits.len() {
            6 => Ok(Self::hex(value)),
            3 => {
                // #abc == #aabbcc
                let expand = |nibble: u32| -> u8 { ((nibble & 0xF) * 0x11) as u8 };
                Ok(Self::new(expand(value >> 8), expand(value >> 4), expand(value)))
            }
            n => Err(ColorError::HexLength(n)),
        }
    }

    fn parse_functional(body: &str) -> Option<Self> {
        let mut channels = body.split(',').map(|part| part.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        Some(Self::new(r, g, b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::FOREST
    }
}

/// 8-bit RGB color with a floating alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (0-1).
    pub a: f32,
}

impl Rgba {
    /// Creates a color from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the color with its alpha multiplied by `factor`.
    #[must_use]
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }

    /// Drops the alpha channel.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Rgb::parse("#1a6b3a"), Ok(Rgb::FOREST));
        assert_eq!(Rgb::parse("  #2D7A45 "), Ok(Rgb::new(0x2d, 0x7a, 0x45)));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Rgb::parse("#fa0"), Ok(Rgb::new(0xff, 0xaa, 0x00)));
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(Rgb::parse("rgb(12, 34, 56)"), Ok(Rgb::new(12, 34, 56)));
        assert!(matches!(Rgb::parse("rgb(1, 2)"), Err(ColorError::Functional(_))));
        assert!(matches!(Rgb::parse("rgb(1, 2, 300)"), Err(ColorError::Functional(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse(""), Err(ColorError::Empty));
        assert_eq!(Rgb::parse("#12345"), Err(ColorError::HexLength(5)));
        assert!(matches!(Rgb::parse("#zzzzzz"), Err(ColorError::HexDigit(_))));
        assert!(matches!(Rgb::parse("green"), Err(ColorError::Unsupported(_))));
    }

    #[test]
    fn test_empty_hex_reports_length() {
        assert_eq!(Rgb::parse("#"), Err(ColorError::HexLength(0)));
        assert_eq!(Rgb::parse("  #  "), Err(ColorError::HexLength(0)));
    }

    #[test]
    fn test_scale_alpha() {
        let c = Rgba::new(10, 20, 30, 0.5).scale_alpha(0.5);
        assert!((c.a - 0.25).abs() < f32::EPSILON);
        assert_eq!(c.rgb(), Rgb::new(10, 20, 30));
    }
}
