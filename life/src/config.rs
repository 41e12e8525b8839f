use serde::Deserialize;

use crate::error::LifeError;

/// Board dimensions in pixels, the pixel size of one cell and the chance
/// that a cell starts alive.
///
/// Field names follow the JSON layout: `width`, `height`, `cellSize`,
/// `liveDensity` and the optional `seed` for the random generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub live_density: f64,
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 5,
            height: 5,
            cell_size: 1,
            live_density: 0.0,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize, cell_size: usize, live_density: f64) -> Self {
        BoardConfig {
            width,
            height,
            cell_size,
            live_density,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration and return `(columns, rows)`.
    pub fn dimensions(&self) -> Result<(usize, usize), LifeError> {
        if self.cell_size == 0 {
            return Err(LifeError::ZeroDimension { name: "cellSize" });
        }
        let columns = Self::cells_along("width", self.width, self.cell_size)?;
        let rows = Self::cells_along("height", self.height, self.cell_size)?;
        if !(0.0..=1.0).contains(&self.live_density) {
            return Err(LifeError::InvalidDensity(self.live_density));
        }
        Ok((columns, rows))
    }

    fn cells_along(name: &'static str, value: usize, cell_size: usize) -> Result<usize, LifeError> {
        if value == 0 {
            return Err(LifeError::ZeroDimension { name });
        }
        if value % cell_size != 0 {
            return Err(LifeError::NotDivisible { name, value, cell_size });
        }
        Ok(value / cell_size)
    }
}
