//! Color types and Cairo rendering of the wheel.
//!
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Hsv`]: hue/saturation/value as laid out on the wheel
//! - Rendering functions that paint the wheel raster and the selector marker

pub mod color;
pub mod render;

// Re-export commonly used types at module level
pub use color::{Color, Hsv};
pub use render::{MarkerStyle, render_picker, wheel_surface, write_png};

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW};
