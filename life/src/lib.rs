//! A live cell dies if it has fewer than two live neighbors.
//! A live cell with two or three live neighbors lives on to the next generation.
//! A live cell with more than three live neighbors dies.
//! A dead cell will be brought back to live if it has exactly three live neighbors.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
mod patterns;

pub use board::{Board, Census};
pub use cell::{Cell, CellState};
pub use config::BoardConfig;
pub use error::LifeError;
