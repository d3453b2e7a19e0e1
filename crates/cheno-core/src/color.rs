//! RGB colors as read from computed styles and written by the picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a CSS color value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The value is neither `rgb(...)` nor a `#` hex color.
    #[error("unsupported color syntax: {0:?}")]
    Syntax(String),

    /// A channel is missing, not an integer, or out of `0..=255`.
    #[error("invalid color channel {channel:?} in {value:?}")]
    Channel {
        /// The offending channel text.
        channel: String,
        /// The whole input value.
        value: String,
    },
}

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Transient fill applied to a shape under the pointer.
    pub const HOVER: Self = Self::new(255, 192, 203);

    /// Plain black, the fill every shape resolves to when unstyled.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a 6-digit lowercase hex string (`#rrggbb`).
    ///
    /// Packs the channels behind a sentinel `1 << 24` bit so the hex
    /// form always has seven digits, then drops the sentinel digit.
    /// This keeps leading zeros without a width specifier.
    #[must_use]
    pub fn to_hex(self) -> String {
        let packed =
            (1u32 << 24) + (u32::from(self.r) << 16) + (u32::from(self.g) << 8) + u32::from(self.b);
        let digits = format!("{packed:x}");
        format!("#{}", &digits[1..])
    }

    /// Format as a CSS functional color (`rgb(r, g, b)`), the form
    /// browsers report from `getComputedStyle`.
    #[must_use]
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse a CSS color: `rgb(r, g, b)`, `#rrggbb`, or `#rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Syntax`] for any other form and
    /// [`ColorError::Channel`] for a malformed channel.
    pub fn parse_css(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex, value);
        }
        if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_body(body, value);
        }
        Err(ColorError::Syntax(value.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

fn parse_rgb_body(body: &str, value: &str) -> Result<Color, ColorError> {
    let channels: Vec<&str> = body.split(',').map(str::trim).collect();
    let &[r, g, b] = channels.as_slice() else {
        return Err(ColorError::Syntax(value.to_owned()));
    };
    let channel = |text: &str| {
        text.parse::<u8>().map_err(|_| ColorError::Channel {
            channel: text.to_owned(),
            value: value.to_owned(),
        })
    };
    Ok(Color::new(channel(r)?, channel(g)?, channel(b)?))
}

fn parse_hex(hex: &str, value: &str) -> Result<Color, ColorError> {
    let invalid = |channel: &str| ColorError::Channel {
        channel: channel.to_owned(),
        value: value.to_owned(),
    };
    match hex.len() {
        3 if hex.is_ascii() => {
            let mut rgb = [0u8; 3];
            for (slot, ch) in rgb.iter_mut().zip(hex.chars()) {
                let n = ch.to_digit(16).ok_or_else(|| invalid(&ch.to_string()))?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    *slot = (n * 17) as u8;
                }
            }
            Ok(Color::new(rgb[0], rgb[1], rgb[2]))
        }
        6 if hex.is_ascii() => {
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range.clone()], 16).map_err(|_| invalid(&hex[range]))
            };
            Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        _ => Err(ColorError::Syntax(value.to_owned())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn computed_rgb_converts_to_hex() {
        let color = Color::parse_css("rgb(34,56,200)").unwrap();
        assert_eq!(color.to_hex(), "#2238c8");
    }

    #[test]
    fn black_keeps_leading_zeros() {
        let color = Color::parse_css("rgb(0,0,0)").unwrap();
        assert_eq!(color.to_hex(), "#000000");
        assert_eq!(Color::new(0, 0, 1).to_hex(), "#000001");
    }

    #[test]
    fn computed_style_spacing_is_accepted() {
        // Browsers report computed fills with spaces after commas.
        assert_eq!(
            Color::parse_css("rgb(255, 192, 203)").unwrap(),
            Color::HOVER
        );
        assert_eq!(Color::HOVER.to_css_rgb(), "rgb(255, 192, 203)");
    }

    #[test]
    fn hex_forms_parse() {
        assert_eq!(
            Color::parse_css("#ff0000").unwrap(),
            Color::new(255, 0, 0)
        );
        assert_eq!(
            Color::parse_css(" #FFF ").unwrap(),
            Color::new(255, 255, 255)
        );
        assert_eq!("#003865".parse::<Color>().unwrap().to_hex(), "#003865");
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        let err = Color::parse_css("rgb(256, 0, 0)").unwrap_err();
        assert!(matches!(err, ColorError::Channel { ref channel, .. } if channel == "256"));
    }

    #[test]
    fn wrong_channel_count_is_a_syntax_error() {
        assert!(matches!(
            Color::parse_css("rgb(1, 2)"),
            Err(ColorError::Syntax(_))
        ));
        assert!(matches!(
            Color::parse_css("rgba(1, 2, 3, 0.5)"),
            Err(ColorError::Syntax(_))
        ));
        assert!(matches!(
            Color::parse_css("#12345"),
            Err(ColorError::Syntax(_))
        ));
    }

    #[test]
    fn invalid_hex_digit_is_a_channel_error() {
        assert!(matches!(
            Color::parse_css("#gg0000"),
            Err(ColorError::Channel { .. })
        ));
    }
}
