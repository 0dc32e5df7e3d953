//! Chart colors.
//!
//! A [`Color`] is read from either `rgb(r, g, b)` or `#rrggbb` (or the short
//! `#rgb`) and always written in the CSS hex form. The fill color under a
//! line is the same color with the fixed [`FILL_ALPHA`] suffix appended,
//! which CSS reads as an 8-digit `#rrggbbaa` color.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Serialize;
use serde::Serializer;

use crate::error::VisError;

/// The alpha suffix appended to a color to derive its fill color (0x33, 20%).
pub const FILL_ALPHA: &str = "33";

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Creates a color from its red, green and blue components.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
        Self { red, green, blue }
    }

    /// The translucent variant of the color used to fill the area under a line.
    pub fn fill(&self) -> FillColor {
        FillColor(*self)
    }

    fn from_hex(hex: &str) -> Option<Color> {
        if !hex.is_ascii() {
            return None;
        }

        let component = |digits: &str| u8::from_str_radix(digits, 16).ok();

        match hex.len() {
            6 => Some(Color::rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            3 => {
                let short = |digit: &str| component(digit).map(|c| c * 0x11);
                Some(Color::rgb(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => None,
        }
    }

    fn from_rgb_function(args: &str) -> Option<Color> {
        let mut components = args.split(',').map(|c| c.trim().parse::<u8>().ok());

        let color = Color::rgb(
            components.next()??,
            components.next()??,
            components.next()??,
        );

        components.next().is_none().then_some(color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = VisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();

        let color = if let Some(hex) = text.strip_prefix('#') {
            Color::from_hex(hex)
        } else if let Some(args) = text
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Color::from_rgb_function(args)
        } else {
            None
        };

        color.ok_or_else(|| VisError::InvalidColor(s.to_owned()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A [`Color`] with the [`FILL_ALPHA`] suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillColor(Color);

impl FillColor {
    /// The opaque color this fill is derived from.
    pub fn color(&self) -> Color {
        self.0
    }
}

impl Display for FillColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{FILL_ALPHA}", self.0)
    }
}

impl Serialize for FillColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
