#![forbid(unsafe_code)]

//! Color plumbing for the doom-fire engine.
//!
//! This crate provides:
//! - [`Interpolation`] and [`interpolate`] for scalar easing
//! - [`Rgb`]/[`Hsv`] color types with hexagonal-cone conversions
//! - [`REFERENCE_GRADIENT`], the fixed 38-color classic fire gradient
//! - [`generate_palette`] for resampling the gradient to any size >= 2
//!
//! Everything here is pure and deterministic; the simulation crate layers
//! the cellular automaton on top.

/// Rgb/Hsv color types, conversions, and color-space-aware lerp.
pub mod color;
/// The fixed reference gradient and the palette resampler.
pub mod gradient;
/// Scalar interpolation (linear and cosine easing).
pub mod interp;

pub use color::{ColorSpace, Hsv, Rgb, lerp_color};
pub use gradient::{PaletteError, REFERENCE_GRADIENT, REFERENCE_GRADIENT_LEN, generate_palette};
pub use interp::{Interpolation, interpolate, quantize_channel};
