//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// initial_color = "cyan"
///
/// # Hex color
/// initial_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// initial_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, cyan, magenta, white, black) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Names and hex strings go through `util::parse_color()`. Unrecognized
    /// strings fall back to `fallback` with a warning. RGB arrays are converted
    /// from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|_| {
                warn!("Unknown color '{}', using {}", name, fallback.to_hex());
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: f64::from(*r) / 255.0,
                g: f64::from(*g) / 255.0,
                b: f64::from(*b) / 255.0,
                a: 1.0,
            },
        }
    }

    /// Same as [`to_color_or`](Self::to_color_or) with white as the fallback.
    pub fn to_color(&self) -> Color {
        self.to_color_or(WHITE)
    }

    /// Whether the spec names a color this crate understands.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).is_ok(),
            ColorSpec::Rgb(_) => true,
        }
    }
}
