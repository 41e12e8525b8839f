use crate::cell::CellState::{Alive, Dead};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

/// A single grid position.
///
/// Neighbors are indices into the owning [`Board`](crate::Board)'s cell
/// storage, so a cell never holds on to its siblings directly.
#[derive(Clone, Debug)]
pub struct Cell {
    state: CellState,
    next: CellState,
    neighbors: [usize; 8],
}

impl Cell {
    pub(crate) fn new(neighbors: [usize; 8]) -> Self {
        Cell {
            state: Dead,
            next: Dead,
            neighbors,
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == Alive
    }

    /// Board indices of the eight neighbors, in wiring order.
    pub fn neighbors(&self) -> &[usize; 8] {
        &self.neighbors
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Compute the pending state from the number of live neighbors in the
    /// current generation. The current state is left untouched.
    pub fn determine_next_state(&mut self, live_neighbors: usize) {
        self.next = match (self.state, live_neighbors) {
            (Alive, 2..=3) => Alive, // Survives
            (Dead, 3) => Alive,      // Becomes alive
            _ => Dead,               // Dies or remains dead
        };
    }

    /// Make the pending state current. Returns true if the state changed.
    pub fn commit(&mut self) -> bool {
        let changed = self.state != self.next;
        self.state = self.next;
        changed
    }
}
