//! Scalar interpolation primitives.
//!
//! Both easing kinds are pure, total functions. `t == 0.0` and `t == 1.0`
//! short-circuit to the exact endpoints so callers never see float drift at
//! the boundaries.

/// Easing kind used when blending between two scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Straight linear blend: `a * (1 - t) + b * t`.
    #[default]
    Linear,
    /// Cosine ease-in/out: the linear blend driven by `(1 - cos(t*pi)) / 2`.
    Cosine,
}

/// Interpolate between `a` and `b` at fraction `t` in `[0, 1]`.
#[inline]
#[must_use]
pub fn interpolate(kind: Interpolation, a: f64, b: f64, t: f64) -> f64 {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    let t = match kind {
        Interpolation::Linear => t,
        Interpolation::Cosine => (1.0 - (t * std::f64::consts::PI).cos()) / 2.0,
    };
    a * (1.0 - t) + b * t
}

/// Quantize an interpolated channel value to 8 bits.
///
/// Rounds up, matching the reference implementation's `ceil` exactly; the
/// difference is visible in generated palettes, so it is kept bit-for-bit.
#[inline]
#[must_use]
pub fn quantize_channel(value: f64) -> u8 {
    value.ceil().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact_for_both_kinds() {
        for kind in [Interpolation::Linear, Interpolation::Cosine] {
            assert_eq!(interpolate(kind, 3.7, 251.2, 0.0), 3.7);
            assert_eq!(interpolate(kind, 3.7, 251.2, 1.0), 251.2);
        }
    }

    #[test]
    fn linear_midpoint_is_average() {
        let mid = interpolate(Interpolation::Linear, 10.0, 20.0, 0.5);
        assert!((mid - 15.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_midpoint_matches_linear_midpoint() {
        // cos(pi/2) = 0, so the eased fraction at t=0.5 is exactly 0.5.
        let cos_mid = interpolate(Interpolation::Cosine, 10.0, 20.0, 0.5);
        assert!((cos_mid - 15.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_eases_toward_endpoints() {
        // Near t=0 the cosine curve is flatter than linear.
        let lin = interpolate(Interpolation::Linear, 0.0, 100.0, 0.1);
        let cos = interpolate(Interpolation::Cosine, 0.0, 100.0, 0.1);
        assert!(cos < lin, "cosine {cos} should lag linear {lin} near t=0");
    }

    #[test]
    fn interpolation_stays_within_endpoint_range() {
        for kind in [Interpolation::Linear, Interpolation::Cosine] {
            for i in 0..=100 {
                let t = f64::from(i) / 100.0;
                let v = interpolate(kind, 5.0, 9.0, t);
                assert!((5.0..=9.0).contains(&v), "{kind:?} t={t} escaped: {v}");
            }
        }
    }

    #[test]
    fn quantize_rounds_up_and_clamps() {
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(0.001), 1);
        assert_eq!(quantize_channel(254.01), 255);
        assert_eq!(quantize_channel(300.0), 255);
        assert_eq!(quantize_channel(-4.0), 0);
    }
}
