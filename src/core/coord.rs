//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A cell position on the grid, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate: |Δcol| + |Δrow|.
    #[inline]
    pub fn manhattan_distance(&self, other: GridCoord) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr + dc) as u32
    }

    /// Is `other` one of the four orthogonal neighbors of this cell?
    #[inline]
    pub fn is_adjacent(&self, other: GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(2, 2);
        assert_eq!(a.manhattan_distance(b), 4);
        assert_eq!(b.manhattan_distance(a), 4);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_adjacency() {
        let a = GridCoord::new(3, 3);
        assert!(a.is_adjacent(GridCoord::new(3, 4)));
        assert!(a.is_adjacent(GridCoord::new(2, 3)));
        assert!(!a.is_adjacent(GridCoord::new(2, 4)));
        assert!(!a.is_adjacent(a));
    }
}
