use thiserror::Error;

/// Errors raised while building or seeding a [`Board`](crate::Board).
#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("{name} must be positive")]
    ZeroDimension { name: &'static str },

    #[error("{name} {value} is not a multiple of cell size {cell_size}")]
    NotDivisible {
        name: &'static str,
        value: usize,
        cell_size: usize,
    },

    #[error("live density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),

    /// The seed does not cover the board. `row` is the first seed row that
    /// is missing or too short.
    #[error("seed does not cover a {columns}x{rows} board (row {row} is missing or short)")]
    SeedOutOfRange {
        rows: usize,
        columns: usize,
        row: usize,
    },
}
