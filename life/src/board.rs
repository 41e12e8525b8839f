use std::fmt;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellState::{Alive, Dead};
use crate::cell::{Cell, CellState};
use crate::config::BoardConfig;
use crate::error::LifeError;

/// A fixed-size toroidal grid of cells. The first and last columns are
/// neighbors, and so are the first and last rows.
///
/// Cells are stored row-major; `(column, row)` lives at
/// `row * columns + column`.
pub struct Board {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
    cell_size: usize,
    generation: u64,
    rng: StdRng,
}

/// Statistics reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    pub alive: usize,
    pub blocks: usize,
    pub boxes: usize,
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "alive cells: {}", self.alive)?;
        writeln!(f, "blocks: {}", self.blocks)?;
        write!(f, "boxes: {}", self.boxes)
    }
}

impl Board {
    /// Build a board from `config`, wire the wraparound neighbors and fill it
    /// randomly with `config.live_density`.
    pub fn new(config: &BoardConfig) -> Result<Self, LifeError> {
        let (columns, rows) = config.dimensions()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut board = Board {
            cells: Vec::with_capacity(columns * rows),
            columns,
            rows,
            cell_size: config.cell_size,
            generation: 0,
            rng,
        };
        board.connect_neighbors();
        board.randomize(config.live_density);

        debug!(
            "created {}x{} board, density {}, {} alive",
            columns,
            rows,
            config.live_density,
            board.alive_cells_count()
        );
        Ok(board)
    }

    fn connect_neighbors(&mut self) {
        let (columns, rows) = (self.columns, self.rows);
        for y in 0..rows {
            for x in 0..columns {
                let left = if x > 0 { x - 1 } else { columns - 1 };
                let right = if x < columns - 1 { x + 1 } else { 0 };
                let top = if y > 0 { y - 1 } else { rows - 1 };
                let bottom = if y < rows - 1 { y + 1 } else { 0 };

                let index = |column: usize, row: usize| row * columns + column;
                self.cells.push(Cell::new([
                    index(left, top),
                    index(x, top),
                    index(right, top),
                    index(left, y),
                    index(right, y),
                    index(left, bottom),
                    index(x, bottom),
                    index(right, bottom),
                ]));
            }
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn width(&self) -> usize {
        self.columns * self.cell_size
    }

    pub fn height(&self) -> usize {
        self.rows * self.cell_size
    }

    /// Number of completed calls to [`Board::advance`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn index(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.columns && row < self.rows,
            "({column}, {row}) is outside a {}x{} board",
            self.columns,
            self.rows
        );
        row * self.columns + column
    }

    /// # Panics
    ///
    /// Panics if `(column, row)` is outside the board.
    pub fn cell(&self, column: usize, row: usize) -> &Cell {
        &self.cells[self.index(column, row)]
    }

    /// # Panics
    ///
    /// Panics if `(column, row)` is outside the board.
    pub fn is_alive(&self, column: usize, row: usize) -> bool {
        self.cell(column, row).is_alive()
    }

    /// # Panics
    ///
    /// Panics if `(column, row)` is outside the board.
    pub fn set(&mut self, column: usize, row: usize, state: CellState) {
        let index = self.index(column, row);
        self.cells[index].set_state(state);
    }

    /// Neighbor coordinates of `(column, row)` in wiring order: top-left,
    /// top, top-right, left, right, bottom-left, bottom, bottom-right.
    pub fn neighbors(&self, column: usize, row: usize) -> [(usize, usize); 8] {
        let neighbors = *self.cell(column, row).neighbors();
        neighbors.map(|index| (index % self.columns, index / self.columns))
    }

    /// Rows of cells, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    pub fn randomize(&mut self, live_density: f64) {
        for cell in &mut self.cells {
            let state = if self.rng.random::<f64>() < live_density { Alive } else { Dead };
            cell.set_state(state);
        }
    }

    fn live_neighbors(&self, index: usize) -> usize {
        self.cells[index]
            .neighbors()
            .iter()
            .filter(|&&neighbor| self.cells[neighbor].is_alive())
            .count()
    }

    /// Advance the board by one generation. Every cell's next state is
    /// computed before any cell commits. Returns false if nothing changed.
    pub fn advance(&mut self) -> bool {
        for index in 0..self.cells.len() {
            let live_neighbors = self.live_neighbors(index);
            self.cells[index].determine_next_state(live_neighbors);
        }

        let mut changed = false;
        for cell in &mut self.cells {
            changed |= cell.commit();
        }
        self.generation += 1;

        debug!("generation {}: {} alive", self.generation, self.alive_cells_count());
        changed
    }

    /// Overwrite the board from a seed grid: one line per row, `'1'` for a
    /// live cell and any other character for a dead one.
    ///
    /// The seed must cover the whole board. On error the board is left as it
    /// was.
    pub fn read_seed(&mut self, seed: &str) -> Result<(), LifeError> {
        let lines: Vec<Vec<char>> = seed.lines().map(|line| line.chars().collect()).collect();
        let out_of_range = |row| LifeError::SeedOutOfRange {
            rows: self.rows,
            columns: self.columns,
            row,
        };

        for row in 0..self.rows {
            match lines.get(row) {
                Some(line) if line.len() >= self.columns => {}
                _ => return Err(out_of_range(row)),
            }
        }
        if lines.len() > self.rows || lines.iter().any(|line| line.len() > self.columns) {
            warn!("seed is larger than the {}x{} board, extra cells ignored", self.columns, self.rows);
        }

        for (row, line) in lines.iter().take(self.rows).enumerate() {
            for (column, &ch) in line.iter().take(self.columns).enumerate() {
                let state = if ch == '1' { Alive } else { Dead };
                self.set(column, row, state);
            }
        }
        Ok(())
    }

    pub fn alive_cells_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn census(&self) -> Census {
        Census {
            alive: self.alive_cells_count(),
            blocks: self.blocks_count(),
            boxes: self.boxes_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dead_board(columns: usize, rows: usize) -> Board {
        Board::new(&BoardConfig::new(columns, rows, 1, 0.0)).unwrap()
    }

    fn snapshot(board: &Board) -> Vec<bool> {
        board.iter_rows().flatten().map(Cell::is_alive).collect()
    }

    #[test]
    fn dimensions_come_from_cell_size() {
        let board = Board::new(&BoardConfig::new(40, 20, 4, 0.0)).unwrap();
        assert_eq!((board.columns(), board.rows()), (10, 5));
        assert_eq!((board.width(), board.height()), (40, 20));
        assert_eq!(board.cell_size(), 4);
        assert_eq!(board.iter_rows().count(), 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Board::new(&BoardConfig::new(10, 10, 3, 0.0)).is_err());
    }

    #[test]
    fn every_cell_has_eight_wrapped_neighbors() {
        let board = dead_board(4, 3);
        assert_eq!(
            board.neighbors(0, 0),
            [(3, 2), (0, 2), (1, 2), (3, 0), (1, 0), (3, 1), (0, 1), (1, 1)]
        );
        assert_eq!(
            board.neighbors(3, 2),
            [(2, 1), (3, 1), (0, 1), (2, 2), (0, 2), (2, 0), (3, 0), (0, 0)]
        );
        assert_eq!(
            board.neighbors(1, 1),
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn density_bounds_fill_the_board() {
        let empty = Board::new(&BoardConfig::new(6, 6, 1, 0.0).with_seed(1)).unwrap();
        assert_eq!(empty.alive_cells_count(), 0);
        let full = Board::new(&BoardConfig::new(6, 6, 1, 1.0).with_seed(1)).unwrap();
        assert_eq!(full.alive_cells_count(), 36);
    }

    #[test]
    fn seeded_boards_are_reproducible() {
        let config = BoardConfig::new(16, 16, 1, 0.4).with_seed(42);
        let a = Board::new(&config).unwrap();
        let b = Board::new(&config).unwrap();
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn randomize_redraws_every_cell() {
        let mut board = Board::new(&BoardConfig::new(8, 8, 1, 1.0).with_seed(3)).unwrap();
        board.randomize(0.0);
        assert_eq!(board.alive_cells_count(), 0);
    }

    #[test]
    fn advance_uses_the_frozen_generation() {
        // A vertical blinker in the middle of a 5x5 board turns horizontal.
        // An in-place update would let freshly born cells skew the counts.
        let mut board = dead_board(5, 5);
        for row in 1..=3 {
            board.set(2, row, Alive);
        }
        assert!(board.advance());
        let alive: Vec<(usize, usize)> = (0..5)
            .flat_map(|row| (0..5).map(move |column| (column, row)))
            .filter(|&(column, row)| board.is_alive(column, row))
            .collect();
        assert_eq!(alive, vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn advance_reports_a_stable_board() {
        let mut board = dead_board(5, 5);
        assert!(!board.advance());
    }

    #[test]
    fn read_seed_maps_lines_to_rows() {
        let mut board = dead_board(4, 3);
        board.read_seed("1000\n0100\n0011\n").unwrap();
        assert!(board.is_alive(0, 0));
        assert!(board.is_alive(1, 1));
        assert!(board.is_alive(2, 2));
        assert!(board.is_alive(3, 2));
        assert!(!board.is_alive(1, 0));
        assert_eq!(board.alive_cells_count(), 4);
    }

    #[test]
    fn read_seed_treats_other_characters_as_dead() {
        let mut board = dead_board(3, 1);
        board.read_seed("1*x").unwrap();
        assert_eq!(board.alive_cells_count(), 1);
    }

    #[test]
    fn read_seed_counts_characters_not_bytes() {
        let mut board = dead_board(3, 1);
        board.read_seed("é10").unwrap();
        assert!(!board.is_alive(0, 0));
        assert!(board.is_alive(1, 0));
        assert!(!board.is_alive(2, 0));
    }

    #[test]
    fn short_non_ascii_row_is_out_of_range() {
        let mut board = dead_board(3, 1);
        assert_eq!(
            board.read_seed("é1"),
            Err(LifeError::SeedOutOfRange {
                rows: 1,
                columns: 3,
                row: 0
            })
        );
        assert_eq!(board.alive_cells_count(), 0);
    }

    #[test]
    fn read_seed_ignores_overflow() {
        let mut board = dead_board(2, 2);
        board.read_seed("111\n111\n111\n").unwrap();
        assert_eq!(board.alive_cells_count(), 4);
    }

    #[test]
    fn short_seed_is_an_error_and_leaves_board_alone() {
        let mut board = dead_board(3, 3);
        board.set(1, 1, Alive);

        assert_eq!(
            board.read_seed("000\n000\n"),
            Err(LifeError::SeedOutOfRange {
                rows: 3,
                columns: 3,
                row: 2
            })
        );
        assert_eq!(
            board.read_seed("000\n00\n000\n"),
            Err(LifeError::SeedOutOfRange {
                rows: 3,
                columns: 3,
                row: 1
            })
        );
        assert_eq!(board.alive_cells_count(), 1);
        assert!(board.is_alive(1, 1));
    }

    #[test]
    fn census_display() {
        let census = Census {
            alive: 4,
            blocks: 1,
            boxes: 0,
        };
        assert_eq!(census.to_string(), "alive cells: 4\nblocks: 1\nboxes: 0");
    }
}
