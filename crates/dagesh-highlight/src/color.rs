//! RGBA colors for highlight styling.
//!
//! The engine treats colors as opaque values it passes through to the
//! renderer; the only operation it ever performs is overriding the alpha
//! channel of a stored user-highlight color. Hex parsing exists for theme
//! files and CLI flags.

use std::{fmt, ops::Range, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not begin with `#`.
    #[error("color '{value}' must start with '#'")]
    MissingHash {
        /// The rejected input.
        value: String,
    },

    /// The string is not 6 or 8 hex digits long.
    #[error("color '{value}' must be #rrggbb or #rrggbbaa")]
    BadLength {
        /// The rejected input.
        value: String,
    },

    /// A character is not a hex digit.
    #[error("color '{value}' contains a non-hex digit")]
    BadDigit {
        /// The rejected input.
        value: String,
    },
}

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `#rrggbb` or `#rrggbbaa` (case-insensitive digits).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value.strip_prefix('#').ok_or_else(|| {
            ParseColorError::MissingHash {
                value: value.to_string(),
            }
        })?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::BadLength {
                value: value.to_string(),
            });
        }

        let channel = |range: Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::BadDigit {
                value: value.to_string(),
            })
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 255 };

        Ok(Self { r, g, b, a })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb() {
        let color: Color = "#ffe08a".parse().unwrap();
        assert_eq!(color, Color::rgb(0xff, 0xe0, 0x8a));
    }

    #[test]
    fn parses_rgba() {
        let color: Color = "#90e0ef60".parse().unwrap();
        assert_eq!(color, Color::rgba(0x90, 0xe0, 0xef, 0x60));
    }

    #[test]
    fn parses_uppercase_digits() {
        let color: Color = "#FFB703".parse().unwrap();
        assert_eq!(color, Color::rgb(0xff, 0xb7, 0x03));
    }

    #[test]
    fn rejects_missing_hash() {
        let err = "ffe08a".parse::<Color>().unwrap_err();
        assert!(matches!(err, ParseColorError::MissingHash { .. }));
    }

    #[test]
    fn rejects_bad_length() {
        let err = "#fff".parse::<Color>().unwrap_err();
        assert!(matches!(err, ParseColorError::BadLength { .. }));
    }

    #[test]
    fn rejects_bad_digit() {
        let err = "#ggqq00".parse::<Color>().unwrap_err();
        assert!(matches!(err, ParseColorError::BadDigit { .. }));
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let color = Color::rgb(1, 2, 3).with_alpha(96);
        assert_eq!(color, Color::rgba(1, 2, 3, 96));
    }

    #[test]
    fn display_round_trips() {
        for text in ["#ffe08a", "#90e0ef60"] {
            let color: Color = text.parse().unwrap();
            assert_eq!(color.to_string(), text);
        }
    }
}
