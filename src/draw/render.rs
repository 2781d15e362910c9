//! Cairo-based rendering of the wheel and the selector marker.

use super::color::Color;
use crate::error::{Result, WheelError};
use crate::input::ColorPicker;
use crate::wheel::WheelRaster;
use log::info;
use std::fs::File;
use std::path::Path;

/// Appearance of the selector ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Whether the ring is drawn at all
    pub visible: bool,
    /// Ring color
    pub color: Color,
    /// Ring line width in pixels
    pub thickness: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            visible: true,
            color: super::color::BLACK,
            thickness: 2.0,
        }
    }
}

/// Copies the wheel raster into a new ARGB32 image surface.
///
/// Raster cells are either fully opaque or fully transparent, so the packed
/// values are already valid premultiplied ARGB.
pub fn wheel_surface(raster: &WheelRaster) -> Result<cairo::ImageSurface> {
    let size = raster.size();
    let side = i32::try_from(size).map_err(|_| WheelError::InvalidSurfaceSize(size))?;
    let stride = cairo::Format::ARgb32.stride_for_width(side as u32)?;
    let row_bytes = stride as usize;

    let mut data = vec![0u8; row_bytes * size];
    for (row, cells) in data.chunks_exact_mut(row_bytes).zip(raster.rows()) {
        for (pixel, argb) in row.chunks_exact_mut(4).zip(cells) {
            pixel.copy_from_slice(&argb.to_ne_bytes());
        }
    }

    Ok(cairo::ImageSurface::create_for_data(
        data,
        cairo::Format::ARgb32,
        side,
        side,
        stride,
    )?)
}

/// Fills the whole canvas with `color`; `None` leaves it transparent.
pub fn render_background(ctx: &cairo::Context, color: Option<Color>) {
    if let Some(bg) = color {
        ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = ctx.paint(); // Ignore errors - a failed paint just leaves the background transparent
    }
}

/// Paints the wheel with its top-left corner at (`x`, `y`).
pub fn render_wheel(ctx: &cairo::Context, wheel: &cairo::ImageSurface, x: f64, y: f64) -> Result<()> {
    ctx.save()?;
    ctx.set_source_surface(wheel, x, y)?;
    ctx.paint()?;
    ctx.restore()?;
    Ok(())
}

/// Draws the selector ring centered on the picker's current position.
///
/// The ring fills the marker box (`2 * half_width` by `2 * half_height`) with
/// the stroke kept inside it. Nothing is drawn for a zero-size marker.
pub fn render_selector(ctx: &cairo::Context, picker: &ColorPicker, style: &MarkerStyle) {
    if !style.visible || style.thickness <= 0.0 {
        return;
    }

    let (cx, cy) = picker.marker_center();
    let rx = f64::from(picker.selector_size.half_width) - style.thickness / 2.0;
    let ry = f64::from(picker.selector_size.half_height) - style.thickness / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let _ = ctx.save();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.restore();

    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.thickness);
    let _ = ctx.stroke();
}

/// Renders the complete widget: background, wheel and selector.
///
/// The surface has the picker's measured size, with the wheel inset by the
/// marker half-size.
pub fn render_picker(
    picker: &ColorPicker,
    raster: &WheelRaster,
    style: &MarkerStyle,
    background: Option<Color>,
) -> Result<cairo::ImageSurface> {
    let (width, height) = picker.selector_size.measured_size();
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let wheel = wheel_surface(raster)?;

    {
        let ctx = cairo::Context::new(&surface)?;
        render_background(&ctx, background);
        render_wheel(
            &ctx,
            &wheel,
            f64::from(picker.selector_size.half_width),
            f64::from(picker.selector_size.half_height),
        )?;
        render_selector(&ctx, picker, style);
    }

    surface.flush();
    Ok(surface)
}

/// Writes a surface to `path` as PNG.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    info!(
        "Wrote {}x{} preview to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}
