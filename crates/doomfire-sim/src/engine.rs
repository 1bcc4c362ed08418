//! The per-tick propagation rule.
//!
//! One pass over rows `1..height`, reading each cell and writing into the
//! row above it. Processing order matters: row `y` is read before row
//! `y + 1` overwrites it, so every destination cell is derived from the
//! previous tick's state of the row below it. The seed row is read but
//! never written.

use crate::grid::FireGrid;
use crate::rng::RandomSource;

/// Advance the grid by one tick.
///
/// Cold cells (`index 0`) propagate coldness straight up and consume no
/// randomness. Hot cells draw once, drift `0..=2` columns left of the
/// straight-up-plus-one position with torus wraparound, and cool by one
/// step when the drift is odd. Indices only decrease or hold, so a
/// well-formed grid can never produce an out-of-range index.
pub fn propagate(grid: &mut FireGrid, rng: &mut RandomSource) {
    let width = grid.width();
    let height = grid.height();
    debug_assert!(
        width >= 1 && height >= 2,
        "propagation requires a {width}x{height} grid to be at least 1x2"
    );

    for y in 1..height {
        for x in 0..width {
            let heat = grid.get(x, y);
            if heat == 0 {
                grid.set(x, y - 1, 0);
                continue;
            }

            // The `& 3` mask is a no-op on floor(u * 3), but the reference
            // algorithm carries it and its form is kept bit-for-bit.
            let drift = (rng.next_unit() * 3.0).floor() as u32 & 3;
            let dst_x = (u32::from(x) + 1 + u32::from(width) - drift) % u32::from(width);
            grid.set(dst_x as u16, y - 1, heat - (drift & 1) as u16);
        }
    }
}
