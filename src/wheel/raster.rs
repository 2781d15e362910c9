//! Precomputed hue/saturation wheel raster.

use super::geometry::{WHEEL_IMAGE_SIZE, WHEEL_RADIUS, polar_hsv};
use crate::draw::Color;
use log::debug;
use std::sync::OnceLock;

static SHARED_RASTER: OnceLock<WheelRaster> = OnceLock::new();

/// Square grid of packed `0xAARRGGBB` colors covering the wheel.
///
/// Cells inside the disc hold an opaque color; cells in the corners of the
/// square are `0` (fully transparent). The raster never changes after it is
/// built.
#[derive(Clone, PartialEq, Eq)]
pub struct WheelRaster {
    cells: Vec<u32>,
}

impl WheelRaster {
    /// Computes every cell of the wheel.
    pub fn build() -> Self {
        let r = WHEEL_RADIUS;
        let mut cells = vec![0u32; WHEEL_IMAGE_SIZE * WHEEL_IMAGE_SIZE];

        for y in -r..=r {
            for x in -r..=r {
                let hsv = polar_hsv(f64::from(x), f64::from(y));
                // Corners of the square fall outside the circle
                if hsv.s > 1.0 {
                    continue;
                }
                let col = (x + r) as usize;
                let row = (y + r) as usize;
                cells[row * WHEEL_IMAGE_SIZE + col] = hsv.to_argb();
            }
        }

        debug!(
            "Built {}x{} color wheel raster",
            WHEEL_IMAGE_SIZE, WHEEL_IMAGE_SIZE
        );
        Self { cells }
    }

    /// Process-wide raster, built on first use.
    pub fn shared() -> &'static WheelRaster {
        SHARED_RASTER.get_or_init(Self::build)
    }

    /// Side length in cells.
    pub fn size(&self) -> usize {
        WHEEL_IMAGE_SIZE
    }

    /// Packed color at image coordinates (`0..size`), `0` when unset or out of range.
    pub fn argb_at(&self, col: usize, row: usize) -> u32 {
        if col >= WHEEL_IMAGE_SIZE || row >= WHEEL_IMAGE_SIZE {
            return 0;
        }
        self.cells[row * WHEEL_IMAGE_SIZE + col]
    }

    /// Color at a wheel-centered offset, `None` outside the disc.
    pub fn color_at_offset(&self, x: i32, y: i32) -> Option<Color> {
        let r = WHEEL_RADIUS;
        if !(-r..=r).contains(&x) || !(-r..=r).contains(&y) {
            return None;
        }
        match self.argb_at((x + r) as usize, (y + r) as usize) {
            0 => None,
            argb => Some(Color::from_argb(argb)),
        }
    }

    /// Rows of packed colors, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(WHEEL_IMAGE_SIZE)
    }
}

impl std::fmt::Debug for WheelRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelRaster")
            .field("size", &WHEEL_IMAGE_SIZE)
            .finish_non_exhaustive()
    }
}

/// Builds a fresh wheel raster.
///
/// Most callers want [`WheelRaster::shared`] instead, which computes the
/// raster once per process.
pub fn build_raster() -> WheelRaster {
    WheelRaster::build()
}
