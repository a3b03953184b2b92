//! Seed patterns
//!
//! Classic Conway methuselahs and the composite "mixed" layout. Offsets
//! are `(dx, dy)` from the stamp origin.

use super::store::Grid;

/// Relative live-cell offsets of a pattern
pub type Shape = &'static [(u8, u8)];

const R_PENTOMINO: Shape = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];
const ACORN: Shape = &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)];
const GLIDER: Shape = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
const DIEHARD: Shape = &[(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)];

/// Starting configuration for a new world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// 30% random fill
    Random,
    RPentomino,
    Acorn,
    Glider,
    Diehard,
    /// Fixed layout of methuselahs and gliders plus 10% noise
    Mixed,
}

/// Fixed placements of the mixed layout: `(pattern, x, y)`
pub const MIXED_LAYOUT: [(Pattern, i32, i32); 6] = [
    (Pattern::RPentomino, 5, 15),
    (Pattern::Acorn, 10, 50),
    (Pattern::Diehard, 15, 85),
    (Pattern::Glider, 3, 10),
    (Pattern::Glider, 20, 30),
    (Pattern::Glider, 8, 100),
];

impl Pattern {
    /// Every pattern, in id order
    pub const ALL: [Pattern; 6] = [
        Pattern::Random,
        Pattern::RPentomino,
        Pattern::Acorn,
        Pattern::Glider,
        Pattern::Diehard,
        Pattern::Mixed,
    ];

    /// Look up a pattern by its numeric id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Numeric id
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Offsets for single-shape patterns; `None` for fills
    pub fn shape(self) -> Option<Shape> {
        match self {
            Pattern::RPentomino => Some(R_PENTOMINO),
            Pattern::Acorn => Some(ACORN),
            Pattern::Glider => Some(GLIDER),
            Pattern::Diehard => Some(DIEHARD),
            Pattern::Random | Pattern::Mixed => None,
        }
    }

    /// Write this pattern's shape at `(x, y)` with age 1
    ///
    /// Cells falling outside the grid are clipped. Fill patterns write
    /// nothing.
    pub fn stamp<const N: usize>(self, grid: &mut Grid<N>, x: i32, y: i32) {
        if let Some(shape) = self.shape() {
            for &(dx, dy) in shape {
                grid.set(x + dx as i32, y + dy as i32, 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn grid() -> Grid<256> {
        Grid::new(GridConfig::new(16, 16).unwrap()).unwrap()
    }

    #[test]
    fn test_ids() {
        for (i, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.id() as usize, i);
            assert_eq!(Pattern::from_id(i as u8), Some(*pattern));
        }
        assert_eq!(Pattern::from_id(6), None);
        assert_eq!(Pattern::from_id(255), None);
    }

    #[test]
    fn test_shape_sizes() {
        assert_eq!(Pattern::RPentomino.shape().unwrap().len(), 5);
        assert_eq!(Pattern::Acorn.shape().unwrap().len(), 7);
        assert_eq!(Pattern::Glider.shape().unwrap().len(), 5);
        assert_eq!(Pattern::Diehard.shape().unwrap().len(), 7);
        assert!(Pattern::Random.shape().is_none());
        assert!(Pattern::Mixed.shape().is_none());
    }

    #[test]
    fn test_stamp_glider() {
        let mut grid = grid();
        Pattern::Glider.stamp(&mut grid, 4, 4);
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.get(5, 4), 1);
        assert_eq!(grid.get(6, 5), 1);
        assert_eq!(grid.get(4, 6), 1);
        assert_eq!(grid.get(5, 6), 1);
        assert_eq!(grid.get(6, 6), 1);
    }

    #[test]
    fn test_stamp_clips_at_edge() {
        let mut grid = grid();
        Pattern::Diehard.stamp(&mut grid, 12, 14);
        // Only the two cells of the middle row land inside
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.get(12, 15), 1);
        assert_eq!(grid.get(13, 15), 1);
        assert_eq!(grid.get_wrapped(16, 14), 0);
        assert_eq!(grid.get(0, 14), 0);
    }

    #[test]
    fn test_fill_patterns_stamp_nothing() {
        let mut grid = grid();
        Pattern::Random.stamp(&mut grid, 0, 0);
        Pattern::Mixed.stamp(&mut grid, 0, 0);
        assert_eq!(grid.population(), 0);
    }
}
