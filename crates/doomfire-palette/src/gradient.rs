//! The classic fire gradient and the palette resampler.
//!
//! [`REFERENCE_GRADIENT`] is the fixed design-time gradient; every runtime
//! palette is produced from it by [`generate_palette`]. Resampling preserves
//! the gradient's endpoints byte-for-byte (anchor preservation), so the
//! coldest cell is always the reference black and the hottest always the
//! reference white regardless of palette size.

use std::fmt;

use crate::color::{ColorSpace, Rgb, lerp_color};
use crate::interp::Interpolation;

/// Number of entries in [`REFERENCE_GRADIENT`].
pub const REFERENCE_GRADIENT_LEN: usize = 38;

/// The classic 38-color fire gradient, near-black through white-hot.
///
/// Immutable design-time data; never regenerated or mutated at runtime.
pub const REFERENCE_GRADIENT: [Rgb; REFERENCE_GRADIENT_LEN] = [
    Rgb::new(0x07, 0x07, 0x07),
    Rgb::new(0x1F, 0x07, 0x07),
    Rgb::new(0x2F, 0x0F, 0x07),
    Rgb::new(0x47, 0x0F, 0x07),
    Rgb::new(0x57, 0x17, 0x07),
    Rgb::new(0x67, 0x1F, 0x07),
    Rgb::new(0x77, 0x1F, 0x07),
    Rgb::new(0x8F, 0x27, 0x07),
    Rgb::new(0x9F, 0x2F, 0x07),
    Rgb::new(0xAF, 0x3F, 0x07),
    Rgb::new(0xBF, 0x47, 0x07),
    Rgb::new(0xC7, 0x47, 0x07),
    Rgb::new(0xDF, 0x4F, 0x07),
    Rgb::new(0xDF, 0x57, 0x07),
    Rgb::new(0xDF, 0x57, 0x07),
    Rgb::new(0xD7, 0x5F, 0x07),
    Rgb::new(0xD7, 0x5F, 0x07),
    Rgb::new(0xD7, 0x67, 0x0F),
    Rgb::new(0xCF, 0x6F, 0x00),
    Rgb::new(0xCF, 0x77, 0x0F),
    Rgb::new(0xCF, 0x7F, 0x0F),
    Rgb::new(0xCF, 0x87, 0x17),
    Rgb::new(0xC7, 0x87, 0x17),
    Rgb::new(0xC7, 0x8F, 0x17),
    Rgb::new(0xC7, 0x8F, 0x17),
    Rgb::new(0xC7, 0x97, 0x1F),
    Rgb::new(0xBF, 0x9F, 0x1F),
    Rgb::new(0xBF, 0x9F, 0x1F),
    Rgb::new(0xBF, 0xA7, 0x27),
    Rgb::new(0xBF, 0xA7, 0x27),
    Rgb::new(0xBF, 0xAF, 0x2F),
    Rgb::new(0xB7, 0xAF, 0x2F),
    Rgb::new(0xB7, 0xB7, 0x2F),
    Rgb::new(0xB7, 0xB7, 0x37),
    Rgb::new(0xCF, 0xCF, 0x6F),
    Rgb::new(0xDF, 0xDF, 0x9F),
    Rgb::new(0xEF, 0xEF, 0xC7),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// Rejected palette size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteError {
    /// The size that was requested.
    pub requested: usize,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "palette size {} is below the minimum of 2",
            self.requested
        )
    }
}

impl std::error::Error for PaletteError {}

/// Resample the reference gradient to `target_size` colors.
///
/// - `target_size == 38` returns the reference verbatim (identity; no
///   resampling artifacts).
/// - Larger sizes upsample by walking reference pairs and emitting
///   interpolated sub-steps.
/// - Smaller sizes downsample by fractional sampling into the reference.
///
/// In every case the first and last outputs equal the reference endpoints
/// exactly.
///
/// # Errors
///
/// Returns [`PaletteError`] when `target_size < 2`.
pub fn generate_palette(
    target_size: usize,
    space: ColorSpace,
    kind: Interpolation,
) -> Result<Vec<Rgb>, PaletteError> {
    if target_size < 2 {
        return Err(PaletteError {
            requested: target_size,
        });
    }
    Ok(match target_size.cmp(&REFERENCE_GRADIENT_LEN) {
        std::cmp::Ordering::Equal => REFERENCE_GRADIENT.to_vec(),
        std::cmp::Ordering::Greater => upsample(target_size, space, kind),
        std::cmp::Ordering::Less => downsample(target_size, space, kind),
    })
}

/// Grow the gradient: distribute `target - 1` slots across the 37 reference
/// pairs by cumulative rounding, then append the last reference color
/// verbatim. Within a pair, slot `k` of `n` sits at fraction `k / n`, so the
/// pair's left color is emitted exactly at `k == 0`.
fn upsample(target: usize, space: ColorSpace, kind: Interpolation) -> Vec<Rgb> {
    let gaps = REFERENCE_GRADIENT_LEN - 1;
    let interior = target - 1;
    let boundary = |g: usize| -> usize { ((g * interior) as f64 / gaps as f64).round() as usize };

    let mut out = Vec::with_capacity(target);
    for g in 0..gaps {
        let steps = boundary(g + 1) - boundary(g);
        for k in 0..steps {
            let t = k as f64 / steps as f64;
            out.push(lerp_color(
                REFERENCE_GRADIENT[g],
                REFERENCE_GRADIENT[g + 1],
                t,
                kind,
                space,
            ));
        }
    }
    out.push(REFERENCE_GRADIENT[REFERENCE_GRADIENT_LEN - 1]);
    debug_assert_eq!(out.len(), target);
    out
}

/// Shrink the gradient: output slot `s` samples the continuous position
/// `s * (38 / target)` in the reference, blending between the two colors it
/// falls between. The first and last slots are clamped to the reference
/// endpoints verbatim.
fn downsample(target: usize, space: ColorSpace, kind: Interpolation) -> Vec<Rgb> {
    let scale = REFERENCE_GRADIENT_LEN as f64 / target as f64;

    let mut out = Vec::with_capacity(target);
    out.push(REFERENCE_GRADIENT[0]);
    for s in 1..target - 1 {
        let p = s as f64 * scale;
        let left = (p.floor() as usize).min(REFERENCE_GRADIENT_LEN - 2);
        let frac = p - p.floor();
        out.push(lerp_color(
            REFERENCE_GRADIENT[left],
            REFERENCE_GRADIENT[left + 1],
            frac,
            kind,
            space,
        ));
    }
    out.push(REFERENCE_GRADIENT[REFERENCE_GRADIENT_LEN - 1]);
    out
}
