//! The 2-D cell grid.
//!
//! Row-major, `(x, y)` addressed, row 0 at the top. The bottom row
//! (`height - 1`) is the seed row: the heat source the propagation rule
//! reads from but never writes. Cells hold palette indices, so the grid is
//! meaningless without the palette size it was seeded for; resizing or
//! changing the palette always goes through a full [`FireGrid::reseed`].

use crate::rng::RandomSource;

/// How the seed row is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeedMode {
    /// Every seed cell holds the hottest index (`palette_size - 1`).
    #[default]
    Uniform,
    /// Every seed cell holds an independent random index in
    /// `[0, palette_size)`.
    Random,
}

/// Row-major grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireGrid {
    width: u16,
    height: u16,
    cells: Vec<u16>,
}

impl FireGrid {
    /// Allocate an all-cold grid. Callers reseed before first use.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![0; size],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Row index of the seed row.
    #[must_use]
    pub const fn seed_row(&self) -> u16 {
        self.height - 1
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    /// Read a cell.
    ///
    /// # Panics
    ///
    /// Out-of-range coordinates are a bug in the caller's propagation math,
    /// not a runtime condition; they panic.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> u16 {
        self.cells[self.index_of(x, y)]
    }

    /// Write a cell. Panics on out-of-range coordinates, as [`Self::get`].
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, value: u16) {
        let idx = self.index_of(x, y);
        self.cells[idx] = value;
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, y: u16) -> &[u16] {
        let start = self.index_of(0, y);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Reallocate for new dimensions. All cells reset to 0; the caller
    /// reseeds immediately so no cell ever carries a stale index.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), 0);
    }

    /// Reset every cell: non-seed rows to 0, the seed row per `mode`.
    pub fn reseed(&mut self, palette_size: u16, mode: SeedMode, rng: &mut RandomSource) {
        self.cells.fill(0);
        let bottom = self.seed_row();
        for x in 0..self.width {
            let value = match mode {
                SeedMode::Uniform => palette_size - 1,
                SeedMode::Random => rng.next_index(palette_size),
            };
            self.set(x, bottom, value);
        }
    }
}
