//! Colors given as matplotlib style codes.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, SkymapResult};

/// An opaque RGB color.
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
    /// Pure blue, "b".
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Dark green, "g".
    pub const GREEN: Color = Color::new(0, 128, 0);

    /// Pure red, "r".
    pub const RED: Color = Color::new(255, 0, 0);

    /// Cyan, "c".
    pub const CYAN: Color = Color::new(0, 191, 191);

    /// Magenta, "m".
    pub const MAGENTA: Color = Color::new(191, 0, 191);

    /// Yellow, "y".
    pub const YELLOW: Color = Color::new(191, 191, 0);

    /// Black, "k".
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// White, "w".
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a single letter color code ("b", "g", "r", "c", "m", "y", "k", "w"), or
    /// a hex color in the form "#rrggbb".
    ///
    /// ```
    ///     use skymap_core::vis::Color;
    ///     assert_eq!(Color::from_code("k").unwrap(), Color::BLACK);
    ///     assert_eq!(Color::from_code("#ff8000").unwrap(), Color::new(255, 128, 0));
    ///     assert!(Color::from_code("purple").is_err());
    /// ```
    pub fn from_code(code: &str) -> SkymapResult<Self> {
        let code = code.trim();
        let color = match code {
            "b" => Color::BLUE,
            "g" => Color::GREEN,
            "r" => Color::RED,
            "c" => Color::CYAN,
            "m" => Color::MAGENTA,
            "y" => Color::YELLOW,
            "k" => Color::BLACK,
            "w" => Color::WHITE,
            _ => {
                let hex = code
                    .strip_prefix('#')
                    .filter(|h| h.len() == 6 && h.is_ascii())
                    .ok_or(Error::ValueError(format!("Unknown color code '{}'", code)))?;
                Color::new(
                    u8::from_str_radix(&hex[0..2], 16)?,
                    u8::from_str_radix(&hex[2..4], 16)?,
                    u8::from_str_radix(&hex[4..6], 16)?,
                )
            }
        };
        Ok(color)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_code(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
