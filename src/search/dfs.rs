//! Depth-first search.
//!
//! Produces *a* path, not a shortest one. Trace order reflects pop
//! order, not discovery order.

use std::collections::HashSet;

use log::debug;

use crate::core::{Grid, GridCoord, NeighborOrder, TraversalStack};

use super::types::{endpoints_valid, passes_filters, AttributeFilter, SearchFailure, SearchReport};
use super::reconstruct_path;

/// Run DFS from `start` to `finish`.
///
/// Neighbor policy: non-wall, not-yet-recorded neighbors that pass
/// `filters` are pushed, each stamped `previous = current` at push
/// time, so the parent chain from the finish is a walkable path.
pub fn dfs(
    grid: &mut Grid,
    start: GridCoord,
    finish: GridCoord,
    filters: &[AttributeFilter],
) -> SearchReport {
    if !endpoints_valid(grid, start, finish) {
        debug!("[Dfs] bad endpoints: start={start} finish={finish}");
        return SearchReport::failed(Vec::new(), SearchFailure::BadEndpoints);
    }

    grid.reset_search_state();

    let mut stack = TraversalStack::new();
    let mut recorded: HashSet<GridCoord> = HashSet::new();
    let mut trace: Vec<GridCoord> = Vec::new();
    stack.push(start);

    while let Some(current) = stack.pop() {
        if grid.node(current).is_wall {
            continue;
        }
        if current == finish {
            let path = reconstruct_path(grid, finish);
            return SearchReport::found(trace, path);
        }
        if recorded.insert(current) {
            trace.push(current);
        }
        for neighbor in grid.neighbors(current, NeighborOrder::Default) {
            let node = grid.node(neighbor);
            if node.is_wall || !passes_filters(node, filters) || recorded.contains(&neighbor) {
                continue;
            }
            stack.push(neighbor);
            grid.node_mut(neighbor).previous = Some(current);
        }
    }

    debug!("[Dfs] exhausted: no route from {start} to {finish}");
    SearchReport::failed(trace, SearchFailure::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_finds_walkable_path() {
        let mut grid = Grid::new(4, 4);
        grid.toggle_wall(GridCoord::new(1, 1));
        grid.toggle_wall(GridCoord::new(2, 1));
        let start = GridCoord::new(0, 0);
        let finish = GridCoord::new(3, 3);
        let report = dfs(&mut grid, start, finish, &[]);
        assert!(report.found);
        assert_eq!(report.path.first(), Some(&start));
        assert_eq!(report.path.last(), Some(&finish));
        for pair in report.path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
            assert!(!grid.node(pair[1]).is_wall);
        }
    }

    #[test]
    fn test_dfs_records_nodes_once() {
        let mut grid = Grid::new(4, 4);
        let report = dfs(&mut grid, GridCoord::new(0, 0), GridCoord::new(3, 3), &[]);
        let mut seen = HashSet::new();
        assert!(report.trace.iter().all(|&c| seen.insert(c)));
    }

    #[test]
    fn test_dfs_exhausts_on_walled_off_finish() {
        let mut grid = Grid::new(3, 3);
        for col in 0..3 {
            grid.toggle_wall(GridCoord::new(1, col));
        }
        let report = dfs(&mut grid, GridCoord::new(0, 0), GridCoord::new(2, 2), &[]);
        assert!(!report.found);
        assert_eq!(report.failure, Some(SearchFailure::Exhausted));
    }
}
