//! Age grid storage
//!
//! Cells hold an 8-bit age: 0 is dead, 1 is newborn and higher values count
//! generations survived (saturating at 255). Storage is a fixed array of
//! `N` bytes; the active `width × height` area must fit inside it.

use crate::config::{ConfigError, GridConfig, GRID_CELLS};

/// Toroidal grid of cell ages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const N: usize = GRID_CELLS> {
    cells: [u8; N],
    width: u16,
    height: u16,
}

impl<const N: usize> Grid<N> {
    /// Create an all-dead grid
    ///
    /// Fails with `GridTooLarge` if the dimensions do not fit `N` cells.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let config = GridConfig::new(config.width, config.height)?;
        if config.cells() > N {
            return Err(ConfigError::GridTooLarge);
        }
        Ok(Self {
            cells: [0; N],
            width: config.width,
            height: config.height,
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of active cells
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always false: the minimum grid is 8×8
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Age at `(x, y)`, or 0 outside the grid
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |i| self.cells[i])
    }

    /// Write an age at `(x, y)`; ignored outside the grid
    pub fn set(&mut self, x: i32, y: i32, age: u8) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = age;
        }
    }

    /// Age at `(x, y)` with both axes wrapped onto the torus
    pub fn get_wrapped(&self, x: i32, y: i32) -> u8 {
        let x = x.rem_euclid(self.width as i32);
        let y = y.rem_euclid(self.height as i32);
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Count live cells among the 8 toroidal neighbours of `(x, y)`
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx != 0 || dy != 0) && self.get_wrapped(x + dx, y + dy) > 0 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of live cells
    pub fn population(&self) -> u32 {
        self.cells().iter().filter(|&&age| age > 0).count() as u32
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Active cells in row-major order
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.len()]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.cells[..len]
    }

    /// One row of ages, or `None` past the last row
    pub fn row(&self, y: u16) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Grid<64> {
        Grid::new(GridConfig::new(8, 8).unwrap()).unwrap()
    }

    #[test]
    fn test_default_grid_fits() {
        let grid: Grid = Grid::new(GridConfig::default()).unwrap();
        assert_eq!(grid.len(), 3840);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_too_large() {
        let result: Result<Grid<64>, _> = Grid::new(GridConfig::new(9, 8).unwrap());
        assert_eq!(result, Err(ConfigError::GridTooLarge));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = small();
        grid.set(-1, 0, 5);
        grid.set(8, 0, 5);
        grid.set(0, 8, 5);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(-1, -1), 0);
        assert_eq!(grid.get(100, 3), 0);
    }

    #[test]
    fn test_wrapped_access() {
        let mut grid = small();
        grid.set(7, 7, 3);
        assert_eq!(grid.get_wrapped(-1, -1), 3);
        assert_eq!(grid.get_wrapped(15, 15), 3);
        assert_eq!(grid.get(-1, -1), 0);
    }

    #[test]
    fn test_neighbors_wrap_corners() {
        let mut grid = small();
        grid.set(0, 0, 1);
        grid.set(7, 0, 1);
        grid.set(0, 7, 1);
        grid.set(7, 7, 1);
        // Each corner sees the other three across the seams
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(7, 7), 3);
        assert_eq!(grid.count_neighbors(4, 4), 0);
    }

    #[test]
    fn test_rows_and_clear() {
        let mut grid = small();
        grid.set(2, 1, 9);
        assert_eq!(grid.row(1).unwrap()[2], 9);
        assert!(grid.row(8).is_none());
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
