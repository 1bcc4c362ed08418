//! Color types and RGB/HSV conversion.
//!
//! Conversions use the standard hexagonal-cone formulas on normalized
//! `[0, 1]` components. The round trip `Hsv::to_rgb(Rgb::to_hsv(c))`
//! reproduces `c` within one unit per 8-bit channel.

use crate::interp::{Interpolation, interpolate, quantize_channel};

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSV.
    ///
    /// Degenerate inputs follow the usual conventions: black yields
    /// `h = 0, s = 0`; any gray yields `h = 0`.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if max == 0.0 {
            return Hsv { h: 0.0, s: 0.0, v: 0.0 };
        }
        let s = delta / max;
        if delta == 0.0 {
            return Hsv { h: 0.0, s: 0.0, v: max };
        }

        // Hue sector on the hex cone, normalized to a [0, 1) turn fraction.
        let h6 = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsv { h: h6 / 6.0, s, v: max }
    }
}

/// HSV color with all components normalized to `[0, 1]`.
///
/// `h` is a fraction of a full turn (`0.5` = 180 degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert back to 8-bit RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h6 = (self.h.rem_euclid(1.0)) * 6.0;
        let c = self.v * self.s;
        let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = if h6 < 1.0 {
            (c, x, 0.0)
        } else if h6 < 2.0 {
            (x, c, 0.0)
        } else if h6 < 3.0 {
            (0.0, c, x)
        } else if h6 < 4.0 {
            (0.0, x, c)
        } else if h6 < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }
}

/// Which color space a blend operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Interpolate each RGB channel directly.
    #[default]
    Rgb,
    /// Convert both endpoints to HSV, interpolate h/s/v, convert back.
    Hsv,
}

/// Blend two colors at fraction `t` using the configured easing and space.
///
/// `t == 0.0` returns `a` and `t == 1.0` returns `b` byte-for-byte, so
/// resampling anchors never pick up quantization error.
#[must_use]
pub fn lerp_color(a: Rgb, b: Rgb, t: f64, kind: Interpolation, space: ColorSpace) -> Rgb {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    match space {
        ColorSpace::Rgb => Rgb::new(
            quantize_channel(interpolate(kind, f64::from(a.r), f64::from(b.r), t)),
            quantize_channel(interpolate(kind, f64::from(a.g), f64::from(b.g), t)),
            quantize_channel(interpolate(kind, f64::from(a.b), f64::from(b.b), t)),
        ),
        ColorSpace::Hsv => {
            let ah = a.to_hsv();
            let bh = b.to_hsv();
            Hsv::new(
                interpolate(kind, ah.h, bh.h, t).clamp(0.0, 1.0),
                interpolate(kind, ah.s, bh.s, t).clamp(0.0, 1.0),
                interpolate(kind, ah.v, bh.v, t).clamp(0.0, 1.0),
            )
            .to_rgb()
        }
    }
}
