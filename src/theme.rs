/// Color palette used by the rendering layer
///
/// The palette is loaded once with the config and passed explicitly to every
/// view function. Nothing here is global.

use iced::theme::{self, Theme};
use iced::Color;
use serde::Deserialize;
use thiserror::Error;

/// Error produced when a config color is not `#rrggbb`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// A color written as `#rrggbb` in the config file
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(Color);

impl HexColor {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        HexColor(Color::from_rgb8(r, g, b))
    }

    pub fn color(&self) -> Color {
        self.0
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.0.into_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Length(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Digits(s.to_string()))
        };

        Ok(HexColor::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Named colors the lookup tables choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Blue,
    Green,
    Red,
    Orange,
    Grey,
}

/// All colors and the window theme derived from them
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub background: HexColor,
    pub text: HexColor,
    pub blue: HexColor,
    pub green: HexColor,
    pub red: HexColor,
    pub orange: HexColor,
    pub grey: HexColor,
    /// Filled rating stars
    pub star: HexColor,
    /// Label text drawn on top of colored chips
    pub chip_text: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: HexColor::from_rgb8(0x19, 0x76, 0xd2),
            secondary: HexColor::from_rgb8(0xdc, 0x00, 0x4e),
            background: HexColor::from_rgb8(0xff, 0xff, 0xff),
            text: HexColor::from_rgb8(0x21, 0x21, 0x21),
            blue: HexColor::from_rgb8(0x21, 0x96, 0xf3),
            green: HexColor::from_rgb8(0x4c, 0xaf, 0x50),
            red: HexColor::from_rgb8(0xf4, 0x43, 0x36),
            orange: HexColor::from_rgb8(0xff, 0x98, 0x00),
            grey: HexColor::from_rgb8(0x75, 0x75, 0x75),
            star: HexColor::from_rgb8(0xfa, 0xaf, 0x00),
            chip_text: HexColor::from_rgb8(0xff, 0xff, 0xff),
        }
    }
}

impl Palette {
    pub fn swatch(&self, swatch: Swatch) -> HexColor {
        match swatch {
            Swatch::Blue => self.blue,
            Swatch::Green => self.green,
            Swatch::Red => self.red,
            Swatch::Orange => self.orange,
            Swatch::Grey => self.grey,
        }
    }

    /// iced theme built from this palette
    pub fn theme(&self) -> Theme {
        Theme::custom(
            "Resume Classifier".to_string(),
            theme::Palette {
                background: self.background.color(),
                text: self.text.color(),
                primary: self.primary.color(),
                success: self.green.color(),
                danger: self.red.color(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let color: HexColor = "#2196f3".parse().unwrap();
        assert_eq!(color, HexColor::from_rgb8(0x21, 0x96, 0xf3));

        let bare: HexColor = "FF9800".parse().unwrap();
        assert_eq!(bare.to_hex(), "#ff9800");
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(
            "#fff".parse::<HexColor>(),
            Err(ColorParseError::Length("#fff".to_string()))
        );
        assert_eq!(
            "#zz0000".parse::<HexColor>(),
            Err(ColorParseError::Digits("#zz0000".to_string()))
        );
    }

    #[test]
    fn test_default_swatches() {
        let palette = Palette::default();
        assert_eq!(palette.swatch(Swatch::Blue).to_hex(), "#2196f3");
        assert_eq!(palette.swatch(Swatch::Green).to_hex(), "#4caf50");
        assert_eq!(palette.swatch(Swatch::Red).to_hex(), "#f44336");
        assert_eq!(palette.swatch(Swatch::Orange).to_hex(), "#ff9800");
        assert_eq!(palette.swatch(Swatch::Grey).to_hex(), "#757575");
    }
}
