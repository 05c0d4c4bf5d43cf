//! A* search with Manhattan heuristic.
//!
//! Manhattan distance is admissible and consistent on a 4-connected
//! uniform-cost grid, so the first expansion of the finish node is
//! optimal and path lengths match BFS.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::core::{Grid, GridCoord, NeighborOrder};

use super::types::{endpoints_valid, passes_filters, AttributeFilter, SearchFailure, SearchReport};
use super::reconstruct_path;

/// Open-set entry. Re-discovery with a better cost re-enqueues, so the
/// heap may hold duplicates; stale entries are skipped on pop.
#[derive(Clone, Debug)]
struct OpenNode {
    coord: GridCoord,
    heuristic_distance: u32,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.heuristic_distance == other.heuristic_distance
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other.heuristic_distance.cmp(&self.heuristic_distance)
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run A* from `start` to `finish`.
///
/// Neighbor policy: a neighbor is considered only if it passes every
/// entry in `filters` (walls are excluded via an implicit
/// `IsWall == false` requirement applied alongside the caller's list).
/// Edge weight is uniform 1.
pub fn astar(
    grid: &mut Grid,
    start: GridCoord,
    finish: GridCoord,
    filters: &[AttributeFilter],
) -> SearchReport {
    if !endpoints_valid(grid, start, finish) {
        debug!("[AStar] bad endpoints: start={start} finish={finish}");
        return SearchReport::failed(Vec::new(), SearchFailure::BadEndpoints);
    }

    grid.reset_search_state();
    {
        let node = grid.node_mut(start);
        node.distance = 0;
        node.heuristic_distance = 0;
    }

    let mut open: BinaryHeap<OpenNode> = BinaryHeap::new();
    open.push(OpenNode {
        coord: start,
        heuristic_distance: 0,
    });
    let mut trace: Vec<GridCoord> = Vec::new();

    while let Some(OpenNode { coord: current, .. }) = open.pop() {
        if grid.node(current).is_visited {
            continue; // stale duplicate
        }
        grid.node_mut(current).is_visited = true;
        trace.push(current);

        if current == finish {
            let path = reconstruct_path(grid, finish);
            return SearchReport::found(trace, path);
        }

        for neighbor in grid.neighbors(current, NeighborOrder::Default) {
            let node = grid.node(neighbor);
            if node.is_wall || node.is_visited || !passes_filters(node, filters) {
                continue;
            }
            let tentative = grid.node(current).distance + 1;
            if tentative < grid.node(neighbor).distance {
                let h = neighbor.manhattan_distance(finish);
                let neighbor_node = grid.node_mut(neighbor);
                neighbor_node.distance = tentative;
                neighbor_node.heuristic_distance = tentative + h;
                neighbor_node.previous = Some(current);
                open.push(OpenNode {
                    coord: neighbor,
                    heuristic_distance: tentative + h,
                });
            }
        }
    }

    debug!("[AStar] failed to find path from node-{start} to node-{finish}");
    SearchReport::failed(trace, SearchFailure::Exhausted)
}
