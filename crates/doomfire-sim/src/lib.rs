#![forbid(unsafe_code)]

//! Doom-fire cellular automaton core.
//!
//! The simulation is a bottom-seeded automaton: the bottom row of the grid
//! is the heat source, and each tick every hot cell drifts its heat up one
//! row with a small random horizontal displacement, cooling by at most one
//! palette step. Cells hold palette indices; the active color table is
//! resampled from the classic 38-color gradient by `doomfire-palette`.
//!
//! Everything is single-threaded and synchronous. A [`FireSession`] owns
//! the grid, the RNG, and the active palette; callers drive it with
//! [`FireSession::tick`] and read it between ticks via
//! [`FireSession::snapshot`]. Rendering, input, and frame pacing live
//! outside this crate.
//!
//! ```
//! use doomfire_sim::{ColorSpace, FireConfig, FireSession, Interpolation};
//!
//! let mut session = FireSession::configure(FireConfig {
//!     width: 16,
//!     height: 8,
//!     palette_size: 38,
//!     color_space: ColorSpace::Rgb,
//!     interpolation: Interpolation::Linear,
//!     random_seed: false,
//!     rng_seed: Some(7),
//! })
//! .expect("valid config");
//!
//! session.tick();
//! let snap = session.snapshot();
//! let _hottest = snap.color_at(0, 7);
//! ```

/// The per-tick propagation rule.
pub mod engine;
/// The 2-D cell grid and its seeding.
pub mod grid;
/// Uniform [0, 1) random draws.
pub mod rng;
/// The owned session facade: configure / tick / snapshot / resize.
pub mod session;

pub use engine::propagate;
pub use grid::{FireGrid, SeedMode};
pub use rng::RandomSource;
pub use session::{ConfigError, FireConfig, FireSession, FireSnapshot};

// Re-export the palette-side configuration axes so callers need one crate.
pub use doomfire_palette::{ColorSpace, Interpolation, Rgb};
