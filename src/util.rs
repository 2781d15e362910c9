//! Utility functions for parsing and naming colors.
//!
//! This module provides:
//! - Name and hex-string parsing used by the config file and the CLI
//! - Human-readable names for picked colors

use crate::draw::{Color, Hsv, color::*};
use crate::error::{Result, WheelError};

// ============================================================================
// Color Parsing
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "cyan", "magenta", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "cyan" => Some(CYAN),
        "magenta" | "pink" => Some(MAGENTA),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a `#rrggbb` / `rrggbb` hex string into an opaque color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::from_argb(0xFF00_0000 | rgb))
}

/// Parses a color given by name or as a hex string.
///
/// # Errors
/// Returns [`WheelError::InvalidColor`] when the input is neither.
pub fn parse_color(input: &str) -> Result<Color> {
    let trimmed = input.trim();
    name_to_color(trimmed)
        .or_else(|| hex_to_color(trimmed))
        .ok_or_else(|| WheelError::InvalidColor(input.to_string()))
}

// ============================================================================
// Color Naming
// ============================================================================

/// Rough name of the hue region a wheel color falls in.
///
/// Low-saturation colors are reported as "White" since value is always 1.0
/// on the wheel; anything darker than half value is "Black".
pub fn hsv_to_name(hsv: &Hsv) -> &'static str {
    if hsv.v < 0.5 {
        return "Black";
    }
    if hsv.s < 0.15 {
        return "White";
    }

    match hsv.h.rem_euclid(360.0) {
        h if h < 15.0 => "Red",
        h if h < 45.0 => "Orange",
        h if h < 75.0 => "Yellow",
        h if h < 150.0 => "Green",
        h if h < 195.0 => "Cyan",
        h if h < 255.0 => "Blue",
        h if h < 285.0 => "Violet",
        h if h < 345.0 => "Magenta",
        _ => "Red",
    }
}
