//! Polar/Cartesian mapping between wheel offsets and hue/saturation.
//!
//! All coordinates here are offsets from the wheel center with `x` growing to
//! the right and `y` growing downwards (screen convention). Hue is the angle
//! measured from the positive `x` axis, saturation is the distance from the
//! center raised to [`SATURATION_POWER`].

use crate::draw::Hsv;
use log::{debug, warn};
use std::f64::consts::PI;

/// Wheel radius in pixels.
pub const WHEEL_RADIUS: i32 = 400;

/// Exponent applied to the normalized radius to obtain saturation.
///
/// Values above 1.0 make the inner part of the wheel look less saturated
/// than a linear ramp would.
pub const SATURATION_POWER: f64 = 1.3;

/// Side length of the square wheel raster (`2 * R + 1`).
pub const WHEEL_IMAGE_SIZE: usize = 1 + 2 * WHEEL_RADIUS as usize;

/// Half-size of the selector marker drawn on top of the wheel.
///
/// The marker is kept fully inside the wheel by shrinking the usable radius
/// by these amounts when clamping touches (the clamp inset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorSize {
    pub half_width: i32,
    pub half_height: i32,
}

impl SelectorSize {
    /// Half-sizes are limited to `0..=R` so the clamp ellipse never grows past
    /// the rim or flips through the center.
    pub fn new(half_width: i32, half_height: i32) -> Self {
        let size = Self {
            half_width: half_width.clamp(0, WHEEL_RADIUS),
            half_height: half_height.clamp(0, WHEEL_RADIUS),
        };
        if size.half_width != half_width || size.half_height != half_height {
            warn!(
                "Selector half-size {half_width}x{half_height} out of range, using {}x{}",
                size.half_width, size.half_height
            );
        }
        size
    }

    /// Radii of the ellipse touches are clamped onto.
    fn clamp_radii(&self) -> (f64, f64) {
        (
            f64::from(WHEEL_RADIUS - self.half_width.clamp(0, WHEEL_RADIUS)),
            f64::from(WHEEL_RADIUS - self.half_height.clamp(0, WHEEL_RADIUS)),
        )
    }

    /// Wheel center in widget-local coordinates.
    ///
    /// The wheel image is inset by the marker half-size on every side so the
    /// marker can sit on the rim without being cut off.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(WHEEL_RADIUS + self.half_width),
            f64::from(WHEEL_RADIUS + self.half_height),
        )
    }

    /// Total widget size (width, height) needed to show the wheel and marker.
    pub fn measured_size(&self) -> (i32, i32) {
        let side = WHEEL_IMAGE_SIZE as i32;
        (side + 2 * self.half_width, side + 2 * self.half_height)
    }

    /// Converts widget-local coordinates to a wheel-centered offset.
    pub fn to_offset(&self, local_x: f64, local_y: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (local_x - cx, local_y - cy)
    }
}

/// Full-range arctangent used to lay out hues around the wheel.
///
/// Returns an angle in `[0, 2π)` that grows continuously as the point sweeps
/// from the positive `x` axis through `+y`, `-x` and `-y`. The quadrant
/// handling must stay exactly like this: the wheel raster and the inverse
/// mapping both depend on it.
pub fn atan_full(y: f64, x: f64) -> f64 {
    let a = y.abs().atan2(x.abs());

    if x >= 0.0 && y >= 0.0 {
        a
    } else if x <= 0.0 && y <= 0.0 {
        PI + a
    } else if x < 0.0 && y > 0.0 {
        PI - a
    } else {
        2.0 * PI - a
    }
}

/// Hue and gamma-adjusted saturation at an offset, without range checks.
///
/// Saturation may exceed 1.0 for offsets outside the disc; the raster
/// builder relies on that to carve the circle out of the square.
pub(crate) fn polar_hsv(x: f64, y: f64) -> Hsv {
    let hue = atan_full(y, x).to_degrees();
    let radius = (x * x + y * y).sqrt() / f64::from(WHEEL_RADIUS);

    Hsv {
        h: hue,
        s: radius.powf(SATURATION_POWER),
        v: 1.0,
    }
}

/// Color shown at a wheel offset.
///
/// Callers must keep the point inside the disc; raw input goes through
/// [`clamp_to_disc`] first.
pub fn point_to_color(x: f64, y: f64) -> Hsv {
    debug_assert!(
        (x * x + y * y).sqrt() <= f64::from(WHEEL_RADIUS) + 1e-6,
        "point ({x}, {y}) lies outside the wheel"
    );
    polar_hsv(x, y)
}

/// Inverse of [`point_to_color`]: the wheel offset showing `color`.
///
/// Only hue and saturation are used. Negative saturation is treated as zero
/// and non-finite components map to the center. Saturation above 1.0 yields a
/// point outside the disc.
pub fn color_to_point(color: Hsv) -> (i32, i32) {
    if !color.h.is_finite() || !color.s.is_finite() {
        warn!("Non-finite color {color:?}, using wheel center");
        return (0, 0);
    }

    let a = color.h.to_radians();
    let s = color.s.max(0.0).powf(1.0 / SATURATION_POWER);
    let r = s * f64::from(WHEEL_RADIUS);

    let x = (r * a.cos()).round() as i32;
    let y = (r * a.sin()).round() as i32;

    debug!(
        "color h: {:.2}, s: {:.3}, v: {:.3} -> x: {x}, y: {y}, r: {r:.2}",
        color.h, color.s, color.v
    );

    (x, y)
}

/// Distance under which a rim point counts as already clamped.
const RIM_TOLERANCE: f64 = 1e-9;

/// Pulls a point that lies on or beyond the rim back inside the wheel.
///
/// Points with `sqrt(x² + y²) >= R` are moved onto the ellipse with radii
/// `R - half_width` and `R - half_height` along the same angle, so the whole
/// marker stays on the wheel. Points already inside, or already on that
/// ellipse, are returned unchanged. Non-finite input collapses to the center.
pub fn clamp_to_disc(x: f64, y: f64, selector: SelectorSize) -> (f64, f64) {
    if !x.is_finite() || !y.is_finite() {
        warn!("Ignoring non-finite touch point ({x}, {y}), using wheel center");
        return (0.0, 0.0);
    }

    let radius = f64::from(WHEEL_RADIUS);
    if (x * x + y * y).sqrt() < radius {
        return (x, y);
    }

    let a = atan_full(y, x);
    let (rx, ry) = selector.clamp_radii();
    let (cx, cy) = (rx * a.cos(), ry * a.sin());

    // With a zero inset the clamped point sits on the rim itself; recomputing
    // the angle would move it by rounding noise.
    if (cx - x).abs() <= RIM_TOLERANCE && (cy - y).abs() <= RIM_TOLERANCE {
        return (x, y);
    }

    debug!("Touch ({x:.1}, {y:.1}) crossed the wheel boundary");
    (cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = WHEEL_RADIUS as f64;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn atan_full_matches_axis_directions() {
        assert_eq!(atan_full(0.0, 1.0), 0.0);
        assert!(approx(atan_full(1.0, 0.0), PI / 2.0, 1e-12));
        assert!(approx(atan_full(0.0, -1.0), PI, 1e-12));
        assert!(approx(atan_full(-1.0, 0.0), 3.0 * PI / 2.0, 1e-12));
        assert_eq!(atan_full(0.0, 0.0), 0.0);
    }

    #[test]
    fn atan_full_sweeps_monotonically_through_all_quadrants() {
        let steps: i32 = 3600;
        let mut previous = -1.0;
        for i in 0..steps {
            let theta = 2.0 * PI * f64::from(i) / f64::from(steps);
            let a = atan_full(R * theta.sin(), R * theta.cos());
            assert!((0.0..2.0 * PI).contains(&a), "angle {a} out of range");
            assert!(a > previous, "angle went backwards at step {i}");
            assert!(approx(a, theta, 1e-9), "expected {theta}, got {a}");
            previous = a;
        }
    }

    #[test]
    fn rim_on_positive_x_axis_is_fully_saturated_red() {
        let color = point_to_color(R, 0.0);
        assert!(approx(color.s, 1.0, 1e-12));
        assert_eq!(color.h, 0.0);
        assert_eq!(color.v, 1.0);
    }

    #[test]
    fn center_is_achromatic() {
        let color = point_to_color(0.0, 0.0);
        assert_eq!(color.s, 0.0);
        assert_eq!(color.h, 0.0);
    }

    #[test]
    fn saturation_follows_power_curve() {
        let color = point_to_color(0.0, -R / 2.0);
        assert!(approx(color.s, 0.5_f64.powf(SATURATION_POWER), 1e-12));
        assert!(approx(color.h, 270.0, 1e-9));
    }

    #[test]
    fn color_to_point_inverts_point_to_color_inside_disc() {
        let r = WHEEL_RADIUS;
        for x in (-r..=r).step_by(3) {
            for y in (-r..=r).step_by(3) {
                if x * x + y * y > r * r {
                    continue;
                }
                let (px, py) = color_to_point(point_to_color(f64::from(x), f64::from(y)));
                assert!(
                    (px - x).abs() <= 1 && (py - y).abs() <= 1,
                    "({x}, {y}) came back as ({px}, {py})"
                );
            }
        }
    }

    #[test]
    fn color_to_point_handles_degenerate_colors() {
        assert_eq!(color_to_point(Hsv::new(f64::NAN, 0.5, 1.0)), (0, 0));
        assert_eq!(color_to_point(Hsv::new(120.0, f64::INFINITY, 1.0)), (0, 0));
        assert_eq!(color_to_point(Hsv::new(45.0, -0.3, 1.0)), (0, 0));
    }

    #[test]
    fn clamp_leaves_interior_points_alone() {
        let selector = SelectorSize::new(12, 12);
        assert_eq!(clamp_to_disc(10.0, -20.0, selector), (10.0, -20.0));
        assert_eq!(clamp_to_disc(0.0, 0.0, selector), (0.0, 0.0));
    }

    #[test]
    fn clamp_insets_by_selector_half_size() {
        let selector = SelectorSize::new(12, 20);
        let (x, y) = clamp_to_disc(450.0, 0.0, selector);
        assert!(approx(x, 388.0, 1e-9));
        assert!(approx(y, 0.0, 1e-9));

        let (x, y) = clamp_to_disc(0.0, 500.0, selector);
        assert!(approx(x, 0.0, 1e-9));
        assert!(approx(y, 380.0, 1e-9));

        let color = point_to_color(388.0, 0.0);
        assert!(approx(color.s, (388.0 / R).powf(SATURATION_POWER), 1e-12));
    }

    #[test]
    fn clamp_applies_to_points_exactly_on_rim() {
        let selector = SelectorSize::new(8, 8);
        let (x, y) = clamp_to_disc(-R, 0.0, selector);
        assert!(approx(x, -(R - 8.0), 1e-9));
        assert!(approx(y, 0.0, 1e-9));
    }

    #[test]
    fn clamp_is_idempotent() {
        let selector = SelectorSize::new(12, 16);
        for &(x, y) in &[
            (450.0, 0.0),
            (-300.0, 300.0),
            (1000.0, -1000.0),
            (-5.0, 399.9),
            (120.0, 80.0),
        ] {
            let once = clamp_to_disc(x, y, selector);
            let twice = clamp_to_disc(once.0, once.1, selector);
            assert_eq!(once, twice, "clamping ({x}, {y}) twice moved the point");
        }
    }

    #[test]
    fn clamp_is_idempotent_without_inset() {
        let selector = SelectorSize::new(0, 0);
        let steps: i32 = 3600;
        for i in 0..steps {
            let theta = 2.0 * PI * f64::from(i) / f64::from(steps);
            let (x, y) = (1000.0 * theta.cos(), 1000.0 * theta.sin());
            let once = clamp_to_disc(x, y, selector);
            let twice = clamp_to_disc(once.0, once.1, selector);
            assert_eq!(once, twice, "clamping at step {i} twice moved the point");
            assert!(approx((once.0 * once.0 + once.1 * once.1).sqrt(), R, 1e-9));
        }
    }

    #[test]
    fn negative_half_size_is_treated_as_zero() {
        let selector = SelectorSize::new(-20, -20);
        assert_eq!(selector, SelectorSize::new(0, 0));

        let (x, y) = clamp_to_disc(900.0, 0.0, selector);
        assert!(approx(x, R, 1e-9));
        assert!(approx(y, 0.0, 1e-9));
        let color = point_to_color(x, y);
        assert!(approx(color.s, 1.0, 1e-9));
    }

    #[test]
    fn oversized_half_size_never_flips_the_hue() {
        let selector = SelectorSize::new(500, 500);
        assert_eq!(selector.half_width, WHEEL_RADIUS);
        assert_eq!(selector.half_height, WHEEL_RADIUS);
        let (x, y) = clamp_to_disc(900.0, 0.0, selector);
        assert!(x >= 0.0 && approx(x, 0.0, 1e-9), "x = {x}");
        assert!(approx(y, 0.0, 1e-9));

        // Fields set directly still clamp onto the wheel
        let raw = SelectorSize {
            half_width: 500,
            half_height: -20,
        };
        let (x, y) = clamp_to_disc(0.0, 900.0, raw);
        assert!(approx(x, 0.0, 1e-9));
        assert!(approx(y, R, 1e-9));
        let (x, _) = clamp_to_disc(900.0, 0.0, raw);
        assert!(x >= 0.0, "x = {x}");
    }

    #[test]
    fn clamp_maps_non_finite_input_to_center() {
        let selector = SelectorSize::new(12, 12);
        assert_eq!(clamp_to_disc(f64::NAN, 3.0, selector), (0.0, 0.0));
        assert_eq!(clamp_to_disc(1.0, f64::NEG_INFINITY, selector), (0.0, 0.0));
    }

    #[test]
    fn selector_layout_offsets_wheel_by_half_size() {
        let selector = SelectorSize::new(12, 10);
        assert_eq!(selector.center(), (412.0, 410.0));
        assert_eq!(selector.measured_size(), (825, 821));
        assert_eq!(selector.to_offset(412.0, 410.0), (0.0, 0.0));
        assert_eq!(selector.to_offset(0.0, 0.0), (-412.0, -410.0));
    }
}
