//! RGBA and HSV color types, packed ARGB conversions and named constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use huewheel::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red.to_argb(), 0xFFFF0000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the color as `0xAARRGGBB`, rounding each channel to 8 bits.
    pub fn to_argb(&self) -> u32 {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xFF) / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    /// Converts the RGB part to hue/saturation/value. Alpha is dropped.
    pub fn to_hsv(&self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let chroma = max - min;

        let h = if chroma == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * ((self.g - self.b) / chroma).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / chroma + 2.0)
        } else {
            60.0 * ((self.r - self.g) / chroma + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { chroma / max };

        Hsv { h, s, v: max }
    }

    /// Formats the RGB part as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.to_argb() & 0x00FF_FFFF)
    }
}

/// Hue/saturation/value color as laid out on the wheel.
///
/// Hue is in degrees (`0.0..360.0`), saturation and value in `0.0..=1.0`.
/// Colors picked from the wheel always carry `v == 1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Converts to an opaque RGBA color.
    ///
    /// Hue wraps around 360 degrees; saturation and value are clamped to
    /// `0.0..=1.0`.
    pub fn to_color(&self) -> Color {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color {
            r: r + m,
            g: g + m,
            b: b + m,
            a: 1.0,
        }
    }

    /// Packs as opaque `0xFFRRGGBB`.
    pub fn to_argb(&self) -> u32 {
        self.to_color().to_argb()
    }

    /// Unpacks a `0xAARRGGBB` value; alpha is ignored.
    pub fn from_argb(argb: u32) -> Self {
        Color::from_argb(argb).to_hsv()
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        hsv.to_color()
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        color.to_hsv()
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined cyan color (R=0.0, G=1.0, B=1.0)
pub const CYAN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined magenta color (R=1.0, G=0.0, B=1.0)
pub const MAGENTA: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color, used for unset raster cells
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn primary_hues_convert_to_rgb() {
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_color(), RED);
        assert_eq!(Hsv::new(120.0, 1.0, 1.0).to_color(), GREEN);
        assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_color(), BLUE);
        assert_eq!(Hsv::new(360.0, 1.0, 1.0).to_color(), RED);
        assert_eq!(Hsv::new(200.0, 0.0, 1.0).to_color(), WHITE);
    }

    #[test]
    fn rgb_to_hsv_recovers_hue_and_saturation() {
        let hsv = Hsv::new(90.0, 0.5, 1.0).to_color().to_hsv();
        assert!(approx(hsv.h, 90.0));
        assert!(approx(hsv.s, 0.5));
        assert!(approx(hsv.v, 1.0));

        let magenta = MAGENTA.to_hsv();
        assert!(approx(magenta.h, 300.0));
        assert_eq!(WHITE.to_hsv().s, 0.0);
    }

    #[test]
    fn argb_packing_uses_alpha_in_high_byte() {
        assert_eq!(RED.to_argb(), 0xFFFF_0000);
        assert_eq!(TRANSPARENT.to_argb(), 0);
        assert_eq!(Color::from_argb(0xFF00_FF00), GREEN);
        assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_argb(), 0xFF00_00FF);
    }

    #[test]
    fn hex_formatting_drops_alpha() {
        assert_eq!(YELLOW.to_hex(), "#ffff00");
        assert_eq!(Color::new(0.0, 0.5, 1.0, 0.3).to_hex(), "#0080ff");
    }
}
