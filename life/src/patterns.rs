//! Exact-template detectors for the two still lifes reported in the census.
//!
//! Both scans stay away from the border and never look across the wrap, so
//! a pattern touching an edge of the torus is not counted.

use crate::board::Board;

/// Offsets `(column, row)` from the top-left cell of a block.
const BLOCK_ALIVE: [(isize, isize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// The dead ring around a block.
const BLOCK_RING: [(isize, isize); 12] = [
    (-1, -1), (0, -1), (1, -1), (2, -1),
    (-1, 2), (0, 2), (1, 2), (2, 2),
    (-1, 0), (-1, 1),
    (2, 0), (2, 1),
];

/// Offsets from the top cell of a box (a diamond of four cells).
const BOX_ALIVE: [(isize, isize); 4] = [(0, 0), (-1, 1), (1, 1), (0, 2)];

const BOX_DEAD: [(isize, isize); 5] = [(0, 1), (-1, 0), (1, 0), (-1, 2), (1, 2)];

impl Board {
    /// Count isolated 2x2 blocks whose top-left cell lies in
    /// `1..=columns-3` x `1..=rows-3`.
    pub fn blocks_count(&self) -> usize {
        let mut count = 0;
        for i in 1..self.rows().saturating_sub(2) {
            for j in 1..self.columns().saturating_sub(2) {
                if self.matches(j, i, &BLOCK_ALIVE, &BLOCK_RING) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count boxes whose top cell lies in `1..=columns-2` x `0..=rows-3`.
    pub fn boxes_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.rows().saturating_sub(2) {
            for j in 1..self.columns().saturating_sub(1) {
                if self.matches(j, i, &BOX_ALIVE, &BOX_DEAD) {
                    count += 1;
                }
            }
        }
        count
    }

    fn matches(&self, column: usize, row: usize, alive: &[(isize, isize)], dead: &[(isize, isize)]) -> bool {
        alive.iter().all(|&offset| self.alive_at(column, row, offset))
            && dead.iter().all(|&offset| !self.alive_at(column, row, offset))
    }

    /// Liveness at an offset from `(column, row)`. Anything off the board
    /// counts as dead; the scan ranges keep every template on the board.
    fn alive_at(&self, column: usize, row: usize, (dx, dy): (isize, isize)) -> bool {
        match (column.checked_add_signed(dx), row.checked_add_signed(dy)) {
            (Some(x), Some(y)) if x < self.columns() && y < self.rows() => self.is_alive(x, y),
            _ => false,
        }
    }
}
