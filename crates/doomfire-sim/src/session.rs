//! The owned session facade.
//!
//! A [`FireSession`] is the unit the rendering/CLI collaborators hold: it
//! owns the grid, the RNG, and the active color table, and exposes the
//! four operations they need (`configure`, `tick`, `snapshot`, `resize`)
//! plus palette changes. There is no global state; everything a tick
//! touches lives in the session.

use std::fmt;

use doomfire_palette::{ColorSpace, Interpolation, Rgb, generate_palette};
use tracing::debug;

use crate::engine::propagate;
use crate::grid::{FireGrid, SeedMode};
use crate::rng::RandomSource;

/// Immutable per-session configuration.
///
/// Defaults (grid dimensions, palette size, tick rate) belong to the
/// configuration-loading collaborator, so this struct deliberately has no
/// `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireConfig {
    /// Grid width in cells, `>= 1`.
    pub width: u16,
    /// Grid height in cells, `>= 2` (height 1 has no row to propagate into).
    pub height: u16,
    /// Active palette size, `>= 2`.
    pub palette_size: u16,
    /// Color space the palette resampler interpolates in.
    pub color_space: ColorSpace,
    /// Easing used by the palette resampler.
    pub interpolation: Interpolation,
    /// Seed the bottom row with random indices instead of uniform white-hot.
    pub random_seed: bool,
    /// Pin the RNG for reproducible runs; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

/// Invalid configuration, tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl fmt::Display, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

fn validate_dimensions(width: u16, height: u16) -> Result<(), ConfigError> {
    if width < 1 {
        return Err(ConfigError::new("width", width, "grid width must be at least 1"));
    }
    if height < 2 {
        return Err(ConfigError::new(
            "height",
            height,
            "grid height must be at least 2 so the seed row has a row to heat",
        ));
    }
    Ok(())
}

/// One running fire simulation.
#[derive(Debug, Clone)]
pub struct FireSession {
    grid: FireGrid,
    rng: RandomSource,
    palette: Vec<Rgb>,
    palette_size: u16,
    color_space: ColorSpace,
    interpolation: Interpolation,
    seed_mode: SeedMode,
}

impl FireSession {
    /// Validate the configuration, build the active palette, and seed the
    /// grid.
    ///
    /// # Errors
    ///
    /// Rejects `width < 1`, `height < 2`, and `palette_size < 2`.
    pub fn configure(config: FireConfig) -> Result<Self, ConfigError> {
        validate_dimensions(config.width, config.height)?;
        let palette = generate_palette(
            usize::from(config.palette_size),
            config.color_space,
            config.interpolation,
        )
        .map_err(|err| ConfigError::new("palette_size", config.palette_size, err.to_string()))?;

        let mut rng = match config.rng_seed {
            Some(seed) => RandomSource::with_seed(seed),
            None => RandomSource::from_entropy(),
        };
        let seed_mode = if config.random_seed {
            SeedMode::Random
        } else {
            SeedMode::Uniform
        };
        let mut grid = FireGrid::new(config.width, config.height);
        grid.reseed(config.palette_size, seed_mode, &mut rng);

        debug!(
            width = config.width,
            height = config.height,
            palette_size = config.palette_size,
            ?seed_mode,
            "fire session configured"
        );

        Ok(Self {
            grid,
            rng,
            palette,
            palette_size: config.palette_size,
            color_space: config.color_space,
            interpolation: config.interpolation,
            seed_mode,
        })
    }

    /// Advance the simulation by one frame, in place.
    pub fn tick(&mut self) {
        propagate(&mut self.grid, &mut self.rng);
    }

    /// Read-only view for rendering: the index grid plus the color table.
    ///
    /// The borrow keeps the renderer honest: no snapshot can outlive a
    /// concurrent `tick` or `resize`.
    #[must_use]
    pub fn snapshot(&self) -> FireSnapshot<'_> {
        FireSnapshot {
            grid: &self.grid,
            color_table: &self.palette,
        }
    }

    /// Reallocate the grid and reseed it. The palette is untouched.
    ///
    /// # Errors
    ///
    /// Rejects the same degenerate dimensions as [`Self::configure`].
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), ConfigError> {
        validate_dimensions(width, height)?;
        self.grid.resize(width, height);
        self.grid.reseed(self.palette_size, self.seed_mode, &mut self.rng);
        debug!(width, height, "fire grid resized and reseeded");
        Ok(())
    }

    /// Regenerate the active palette at a new size and fully reseed.
    ///
    /// Regeneration happens before the reseed, so no cell ever holds an
    /// index from the previous palette size.
    ///
    /// # Errors
    ///
    /// Rejects `palette_size < 2`.
    pub fn set_palette_size(&mut self, palette_size: u16) -> Result<(), ConfigError> {
        let palette = generate_palette(
            usize::from(palette_size),
            self.color_space,
            self.interpolation,
        )
        .map_err(|err| ConfigError::new("palette_size", palette_size, err.to_string()))?;
        self.palette = palette;
        self.palette_size = palette_size;
        self.grid.reseed(palette_size, self.seed_mode, &mut self.rng);
        debug!(palette_size, "palette regenerated and grid reseeded");
        Ok(())
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.grid.width()
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.grid.height()
    }

    #[must_use]
    pub const fn palette_size(&self) -> u16 {
        self.palette_size
    }
}

/// Borrowed view of a settled simulation, read between ticks.
#[derive(Debug, Clone, Copy)]
pub struct FireSnapshot<'a> {
    grid: &'a FireGrid,
    color_table: &'a [Rgb],
}

impl<'a> FireSnapshot<'a> {
    /// The palette-index grid.
    ///
    /// The borrow carries the session's lifetime, not the snapshot's, so a
    /// renderer may hold it after the snapshot value itself is gone.
    #[must_use]
    pub fn grid(&self) -> &'a FireGrid {
        self.grid
    }

    /// `color_table[i]` is the RGB color for palette index `i`.
    #[must_use]
    pub fn color_table(&self) -> &'a [Rgb] {
        self.color_table
    }

    /// Resolved color of one cell.
    #[must_use]
    pub fn color_at(&self, x: u16, y: u16) -> Rgb {
        self.color_table[usize::from(self.grid.get(x, y))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doomfire_palette::REFERENCE_GRADIENT;

    fn config(width: u16, height: u16, palette_size: u16) -> FireConfig {
        FireConfig {
            width,
            height,
            palette_size,
            color_space: ColorSpace::Rgb,
            interpolation: Interpolation::Linear,
            random_seed: false,
            rng_seed: Some(0xD00F),
        }
    }

    #[test]
    fn configure_seeds_bottom_row_white_hot() {
        let session = FireSession::configure(config(4, 4, 4)).unwrap();
        let snap = session.snapshot();
        for y in 0..3 {
            assert!(snap.grid().row(y).iter().all(|&c| c == 0));
        }
        assert!(snap.grid().row(3).iter().all(|&c| c == 3));
    }

    #[test]
    fn random_seed_mode_draws_in_range() {
        let mut cfg = config(64, 3, 9);
        cfg.random_seed = true;
        let session = FireSession::configure(cfg).unwrap();
        assert!(session.snapshot().grid().row(2).iter().all(|&c| c < 9));
    }

    #[test]
    fn configure_rejects_degenerate_dimensions() {
        let err = FireSession::configure(config(0, 4, 4)).unwrap_err();
        assert_eq!(err.field, "width");

        let err = FireSession::configure(config(4, 1, 4)).unwrap_err();
        assert_eq!(err.field, "height");

        let err = FireSession::configure(config(4, 4, 1)).unwrap_err();
        assert_eq!(err.field, "palette_size");
        assert!(err.to_string().contains("palette_size=1"));
    }

    #[test]
    fn snapshot_color_table_matches_palette_size() {
        let session = FireSession::configure(config(8, 8, 100)).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.color_table().len(), 100);
        assert_eq!(snap.color_table()[0], REFERENCE_GRADIENT[0]);
        assert_eq!(snap.color_table()[99], REFERENCE_GRADIENT[37]);
    }

    #[test]
    fn color_at_resolves_through_the_table() {
        let session = FireSession::configure(config(4, 4, 38)).unwrap();
        let snap = session.snapshot();
        // Top row is cold black, seed row is white-hot.
        assert_eq!(snap.color_at(0, 0), REFERENCE_GRADIENT[0]);
        assert_eq!(snap.color_at(0, 3), REFERENCE_GRADIENT[37]);
    }

    #[test]
    fn resize_reseeds_and_keeps_palette() {
        let mut session = FireSession::configure(config(8, 8, 38)).unwrap();
        for _ in 0..10 {
            session.tick();
        }
        session.resize(12, 5).unwrap();
        assert_eq!(session.width(), 12);
        assert_eq!(session.height(), 5);

        let snap = session.snapshot();
        assert_eq!(snap.color_table().len(), 38);
        for y in 0..4 {
            assert!(snap.grid().row(y).iter().all(|&c| c == 0));
        }
        assert!(snap.grid().row(4).iter().all(|&c| c == 37));
    }

    #[test]
    fn resize_rejects_degenerate_dimensions() {
        let mut session = FireSession::configure(config(8, 8, 38)).unwrap();
        assert!(session.resize(0, 8).is_err());
        assert!(session.resize(8, 1).is_err());
        // Failed resize leaves the session untouched.
        assert_eq!(session.width(), 8);
        assert_eq!(session.height(), 8);
    }

    #[test]
    fn palette_change_regenerates_table_and_reseeds() {
        let mut session = FireSession::configure(config(6, 6, 38)).unwrap();
        for _ in 0..5 {
            session.tick();
        }
        session.set_palette_size(10).unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.color_table().len(), 10);
        // No stale index from the old 38-entry palette may survive.
        assert!(snap.grid().cells().iter().all(|&c| c < 10));
        assert!(snap.grid().row(5).iter().all(|&c| c == 9));
    }

    #[test]
    fn palette_change_rejects_degenerate_size() {
        let mut session = FireSession::configure(config(6, 6, 38)).unwrap();
        let err = session.set_palette_size(1).unwrap_err();
        assert_eq!(err.field, "palette_size");
        // The old palette stays live after a rejected change.
        assert_eq!(session.palette_size(), 38);
        assert_eq!(session.snapshot().color_table().len(), 38);
    }

    #[test]
    fn snapshot_borrows_outlive_the_snapshot_value() {
        // The views carry the session's lifetime, so chaining through a
        // snapshot temporary is fine and the references stay usable after
        // the snapshot itself is dropped.
        let session = FireSession::configure(config(4, 4, 4)).unwrap();
        let seed_row = session.snapshot().grid().row(3);
        let table = session.snapshot().color_table();
        assert!(seed_row.iter().all(|&c| c == 3));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let mut a = FireSession::configure(config(16, 10, 38)).unwrap();
        let mut b = FireSession::configure(config(16, 10, 38)).unwrap();
        for _ in 0..30 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.snapshot().grid(), b.snapshot().grid());
    }
}
