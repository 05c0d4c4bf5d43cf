//! Bridging paths through already-explored cells.
//!
//! A stack-based exploration can pop a frontier cell that is nowhere
//! near the cell it just stepped on. A physical robot has to drive back
//! through terrain it already knows, so the repair routine plans a
//! shortest route restricted to the stepped-on region.

use std::collections::HashSet;

use log::warn;

use crate::core::{Grid, GridCoord};
use crate::search::{bfs, AttributeFilter, NodeAttribute};

/// Shortest path from `from` to `to` using only cells in `visited`
/// (plus `to` itself, which is about to be stepped on).
///
/// Runs BFS on a scratch clone of the grid with the visited set stamped
/// as mapped and an `IsMapped` neighbor filter, so the search cannot
/// leave known terrain. Returns the full from→to path, or `None` when
/// no such route exists.
pub fn bridge_path(
    grid: &Grid,
    visited: &HashSet<GridCoord>,
    from: GridCoord,
    to: GridCoord,
) -> Option<Vec<GridCoord>> {
    let mut scratch = grid.clone();
    let coords: Vec<GridCoord> = scratch.coords().collect();
    for coord in coords {
        scratch.node_mut(coord).is_mapped = visited.contains(&coord) || coord == to;
    }

    let filters = [AttributeFilter::new(NodeAttribute::IsMapped, true)];
    let report = bfs(&mut scratch, from, to, &filters);
    if !report.found {
        warn!("[Bridge] no route through explored cells from {from} to {to}");
        return None;
    }
    Some(report.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_stays_on_visited_cells() {
        let grid = Grid::new(3, 3);
        // Visited an L along the top row and right column; the direct
        // diagonal through (1,1) is off-limits.
        let visited: HashSet<GridCoord> = [
            GridCoord::new(0, 0),
            GridCoord::new(0, 1),
            GridCoord::new(0, 2),
            GridCoord::new(1, 2),
        ]
        .into_iter()
        .collect();

        let path = bridge_path(&grid, &visited, GridCoord::new(0, 0), GridCoord::new(2, 2))
            .expect("bridge exists");
        assert_eq!(path.first(), Some(&GridCoord::new(0, 0)));
        assert_eq!(path.last(), Some(&GridCoord::new(2, 2)));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
        for coord in &path[..path.len() - 1] {
            assert!(visited.contains(coord));
        }
    }

    #[test]
    fn test_bridge_fails_when_region_disconnected() {
        let grid = Grid::new(3, 3);
        let visited: HashSet<GridCoord> = [GridCoord::new(0, 0), GridCoord::new(2, 2)]
            .into_iter()
            .collect();
        assert!(bridge_path(&grid, &visited, GridCoord::new(0, 0), GridCoord::new(2, 2)).is_none());
    }
}
