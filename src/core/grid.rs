//! Grid storage and neighbor enumeration.
//!
//! The grid is a rectangular, row-major array of [`Node`] cells stored
//! in a single flat `Vec`. Two grids with identical dimensions exist in
//! a simulation: the user-edited ground-truth grid and the robot's own
//! knowledge map (see [`Grid::blank_map`]), which starts fully unmapped
//! and accumulates `is_mapped` flags as the robot explores.
//!
//! `neighbors` returns all in-bounds orthogonal neighbors, unfiltered.
//! Wall and visitation filtering is each algorithm's own, explicit
//! responsibility; no neighbor list excludes walls implicitly.

use serde::{Deserialize, Serialize};

use crate::error::{DhuliError, Result};

use super::coord::GridCoord;
use super::node::{Node, MAX_DUST};

/// Neighbor emission order for the four orthogonal directions.
///
/// The mapping presets traverse the grid in visibly different sweep
/// patterns purely through the order neighbors are pushed on the
/// traversal stack, so emission order is part of the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborOrder {
    /// left, down, right, up. Used by the search algorithms.
    #[default]
    Default,
    /// left, right, down, up.
    Vertical,
    /// down, up, left, right.
    Horizontal,
}

/// Rectangular grid of nodes, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    nodes: Vec<Node>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Create an open grid of the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            nodes: vec![Node::default(); height * width],
            height,
            width,
        }
    }

    /// Build a grid from explicit rows, validating the rectangularity
    /// invariant: every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Node>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(DhuliError::Grid(format!(
                "ragged grid: row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        Ok(Self {
            nodes: rows.into_iter().flatten().collect(),
            height,
            width,
        })
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> usize {
        coord.row * self.width + coord.col
    }

    /// Borrow the node at `coord`. Panics if out of bounds.
    #[inline]
    pub fn node(&self, coord: GridCoord) -> &Node {
        &self.nodes[self.index(coord)]
    }

    /// Mutably borrow the node at `coord`. Panics if out of bounds.
    #[inline]
    pub fn node_mut(&mut self, coord: GridCoord) -> &mut Node {
        let idx = self.index(coord);
        &mut self.nodes[idx]
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| GridCoord::new(row, col)))
    }

    /// Reset transient search state on every node. Runs at the start of
    /// every algorithm invocation since grids are reused across runs.
    pub fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.reset_search_state();
        }
    }

    /// In-bounds orthogonal neighbors of `coord`, in the given emission
    /// order. Unfiltered: walls are included.
    pub fn neighbors(&self, coord: GridCoord, order: NeighborOrder) -> Vec<GridCoord> {
        let GridCoord { row, col } = coord;
        let left = (col > 0).then(|| GridCoord::new(row, col - 1));
        let right = (col + 1 < self.width).then(|| GridCoord::new(row, col + 1));
        let down = (row + 1 < self.height).then(|| GridCoord::new(row + 1, col));
        let up = (row > 0).then(|| GridCoord::new(row - 1, col));

        let ordered = match order {
            NeighborOrder::Default => [left, down, right, up],
            NeighborOrder::Vertical => [left, right, down, up],
            NeighborOrder::Horizontal => [down, up, left, right],
        };
        ordered.into_iter().flatten().collect()
    }

    /// Non-wall neighbors in the given order. Convenience for the
    /// traversals that filter walls at enumeration time.
    pub fn open_neighbors(&self, coord: GridCoord, order: NeighborOrder) -> Vec<GridCoord> {
        self.neighbors(coord, order)
            .into_iter()
            .filter(|&n| !self.node(n).is_wall)
            .collect()
    }

    // === Editing operations ===

    /// Toggle the wall flag at `coord`.
    pub fn toggle_wall(&mut self, coord: GridCoord) {
        let node = self.node_mut(coord);
        node.is_wall = !node.is_wall;
    }

    /// Increment dust at `coord`, wrapping from 9 back to 0.
    pub fn add_dust(&mut self, coord: GridCoord) {
        let node = self.node_mut(coord);
        node.dust = if node.dust == MAX_DUST { 0 } else { node.dust + 1 };
    }

    /// Clear dust at `coord`.
    pub fn clear_dust(&mut self, coord: GridCoord) {
        self.node_mut(coord).dust = 0;
    }

    /// Remove every wall from the grid.
    pub fn clear_all_walls(&mut self) {
        for node in &mut self.nodes {
            node.is_wall = false;
        }
    }

    /// Remove all dust from the grid.
    pub fn clear_all_dust(&mut self) {
        for node in &mut self.nodes {
            node.dust = 0;
        }
    }

    // === Robot map lifecycle ===

    /// Create the robot's knowledge map for this grid: identical
    /// dimensions, fully unmapped, no walls, no dust.
    pub fn blank_map(&self) -> Grid {
        Grid::new(self.height, self.width)
    }

    /// Copy wall placement from the ground-truth grid into this map.
    /// Dimensions must match.
    pub fn sync_layout(&mut self, ground_truth: &Grid) {
        debug_assert_eq!(self.height, ground_truth.height);
        debug_assert_eq!(self.width, ground_truth.width);
        for (node, truth) in self.nodes.iter_mut().zip(&ground_truth.nodes) {
            node.is_wall = truth.is_wall;
        }
    }

    /// Record a visitation trace into this map's `is_mapped` flags.
    pub fn mark_mapped(&mut self, trace: &[GridCoord]) {
        for &coord in trace {
            self.node_mut(coord).is_mapped = true;
        }
    }

    /// Number of cells the robot has mapped.
    pub fn mapped_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_mapped).count()
    }

    // === Defaults used by hosts ===

    /// Default docking station: the grid center.
    pub fn default_dock(&self) -> GridCoord {
        GridCoord::new(self.height / 2, self.width / 2)
    }

    /// Default start/finish endpoints: mid-row, at one fifth and four
    /// fifths of the width.
    pub fn default_endpoints(&self) -> (GridCoord, GridCoord) {
        let row = self.height / 2;
        (
            GridCoord::new(row, self.width / 5),
            GridCoord::new(row, self.width * 4 / 5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![Node::default(), Node::default()],
            vec![Node::default()],
        ];
        let err = Grid::from_rows(rows).unwrap_err();
        assert!(matches!(err, DhuliError::Grid(_)));
    }

    #[test]
    fn test_neighbor_order_vertical() {
        let grid = Grid::new(3, 3);
        let n = grid.neighbors(GridCoord::new(1, 1), NeighborOrder::Vertical);
        assert_eq!(
            n,
            vec![
                GridCoord::new(1, 0), // left
                GridCoord::new(1, 2), // right
                GridCoord::new(2, 1), // down
                GridCoord::new(0, 1), // up
            ]
        );
    }

    #[test]
    fn test_neighbor_order_horizontal() {
        let grid = Grid::new(3, 3);
        let n = grid.neighbors(GridCoord::new(1, 1), NeighborOrder::Horizontal);
        assert_eq!(
            n,
            vec![
                GridCoord::new(2, 1), // down
                GridCoord::new(0, 1), // up
                GridCoord::new(1, 0), // left
                GridCoord::new(1, 2), // right
            ]
        );
    }

    #[test]
    fn test_neighbor_order_default() {
        let grid = Grid::new(3, 3);
        let n = grid.neighbors(GridCoord::new(1, 1), NeighborOrder::Default);
        assert_eq!(
            n,
            vec![
                GridCoord::new(1, 0), // left
                GridCoord::new(2, 1), // down
                GridCoord::new(1, 2), // right
                GridCoord::new(0, 1), // up
            ]
        );
    }

    #[test]
    fn test_neighbors_clip_at_corners() {
        let grid = Grid::new(3, 3);
        let n = grid.neighbors(GridCoord::new(0, 0), NeighborOrder::Default);
        assert_eq!(n, vec![GridCoord::new(1, 0), GridCoord::new(0, 1)]);
    }

    #[test]
    fn test_neighbors_include_walls() {
        let mut grid = Grid::new(3, 3);
        grid.toggle_wall(GridCoord::new(1, 0));
        let n = grid.neighbors(GridCoord::new(1, 1), NeighborOrder::Default);
        assert!(n.contains(&GridCoord::new(1, 0)));
        let open = grid.open_neighbors(GridCoord::new(1, 1), NeighborOrder::Default);
        assert!(!open.contains(&GridCoord::new(1, 0)));
    }

    #[test]
    fn test_add_dust_wraps_at_max() {
        let mut grid = Grid::new(1, 1);
        let c = GridCoord::new(0, 0);
        for _ in 0..MAX_DUST {
            grid.add_dust(c);
        }
        assert_eq!(grid.node(c).dust, 9);
        grid.add_dust(c);
        assert_eq!(grid.node(c).dust, 0);
    }

    #[test]
    fn test_blank_map_and_sync_layout() {
        let mut grid = Grid::new(4, 4);
        grid.toggle_wall(GridCoord::new(2, 2));
        let mut map = grid.blank_map();
        assert_eq!(map.mapped_count(), 0);
        assert!(!map.node(GridCoord::new(2, 2)).is_wall);
        map.sync_layout(&grid);
        assert!(map.node(GridCoord::new(2, 2)).is_wall);
    }

    #[test]
    fn test_mark_mapped() {
        let grid = Grid::new(4, 4);
        let mut map = grid.blank_map();
        map.mark_mapped(&[GridCoord::new(0, 0), GridCoord::new(0, 1), GridCoord::new(0, 0)]);
        assert_eq!(map.mapped_count(), 2);
    }

    #[test]
    fn test_default_endpoints() {
        let grid = Grid::new(25, 50);
        let (start, finish) = grid.default_endpoints();
        assert_eq!(start, GridCoord::new(12, 10));
        assert_eq!(finish, GridCoord::new(12, 40));
        assert_eq!(grid.default_dock(), GridCoord::new(12, 25));
    }
}
