//! Color wheel geometry and raster.
//!
//! - [`geometry`]: mapping between wheel offsets and hue/saturation, plus the
//!   clamp that keeps the selector on the wheel
//! - [`raster`]: the precomputed wheel image

pub mod geometry;
pub mod raster;

pub use geometry::{
    SATURATION_POWER, SelectorSize, WHEEL_IMAGE_SIZE, WHEEL_RADIUS, atan_full, clamp_to_disc,
    color_to_point, point_to_color,
};
pub use raster::{WheelRaster, build_raster};
