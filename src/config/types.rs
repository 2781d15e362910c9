//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Selector marker settings.
///
/// The marker half-size insets the wheel inside the widget and keeps the
/// marker on the wheel when a touch lands outside it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct SelectorConfig {
    /// Half of the marker width in pixels (valid range: 0 - 100)
    #[serde(default = "default_half_size")]
    pub half_width: i32,

    /// Half of the marker height in pixels (valid range: 0 - 100)
    #[serde(default = "default_half_size")]
    pub half_height: i32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            half_width: default_half_size(),
            half_height: default_half_size(),
        }
    }
}

/// Picker behaviour.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct PickerConfig {
    /// Color the selector points at on startup - a named color, `#rrggbb`,
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_initial_color")]
    pub initial_color: ColorSpec,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: default_initial_color(),
        }
    }
}

/// Appearance of the rendered preview image.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct PreviewConfig {
    /// Draw the selector ring on top of the wheel
    #[serde(default = "default_show_marker")]
    pub show_marker: bool,

    /// Ring color
    #[serde(default = "default_marker_color")]
    pub marker_color: ColorSpec,

    /// Ring line width in pixels (valid range: 0.5 - 10.0)
    #[serde(default = "default_marker_thickness")]
    pub marker_thickness: f64,

    /// Fill behind the wheel; leave unset for a transparent background
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            show_marker: default_show_marker(),
            marker_color: default_marker_color(),
            marker_thickness: default_marker_thickness(),
            background: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_half_size() -> i32 {
    12
}

fn default_initial_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_show_marker() -> bool {
    true
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_marker_thickness() -> f64 {
    2.0
}
