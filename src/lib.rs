//! Hue/saturation color wheel: geometry, raster and selection state.
//!
//! The [`wheel`] module maps between wheel offsets and colors and builds the
//! wheel image; [`input`] turns touch events into selections. Rendering,
//! configuration and color parsing support hosts that embed the picker.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod util;
pub mod wheel;

pub use config::Config;
pub use error::WheelError;
