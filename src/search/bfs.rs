//! Breadth-first (uniform-cost) search.
//!
//! Unweighted edges, so expanding by minimum known distance yields true
//! shortest paths by hop count. Extraction is stable: among equal
//! distances the earliest-inserted node is taken first.

use log::debug;

use crate::core::{Grid, GridCoord, NeighborOrder, Node};

use super::types::{endpoints_valid, passes_filters, AttributeFilter, SearchFailure, SearchReport};
use super::reconstruct_path;

/// Run BFS from `start` to `finish`.
///
/// Neighbor policy: walls are skipped at selection; relaxation touches
/// unvisited, non-wall neighbors that also pass `filters`. A node still
/// at `UNREACHED` when selected proves the remaining frontier is
/// unreachable and ends the run with the partial trace.
///
/// Visitation marks are transient: they are cleared again before every
/// return.
pub fn bfs(
    grid: &mut Grid,
    start: GridCoord,
    finish: GridCoord,
    filters: &[AttributeFilter],
) -> SearchReport {
    if !endpoints_valid(grid, start, finish) {
        debug!("[Bfs] bad endpoints: start={start} finish={finish}");
        return SearchReport::failed(Vec::new(), SearchFailure::BadEndpoints);
    }

    grid.reset_search_state();
    grid.node_mut(start).distance = 0;

    let mut unvisited: Vec<GridCoord> = grid.coords().collect();
    let mut trace: Vec<GridCoord> = Vec::new();

    loop {
        // Stable min-distance extraction: first index holding the minimum.
        let Some(idx) = unvisited
            .iter()
            .enumerate()
            .min_by_key(|(_, &c)| grid.node(c).distance)
            .map(|(idx, _)| idx)
        else {
            break;
        };
        let current = unvisited.remove(idx);

        if grid.node(current).is_wall {
            continue;
        }
        if grid.node(current).distance == Node::UNREACHED {
            // Everything left is unreachable from the start.
            debug!("[Bfs] exhausted: no route from {start} to {finish}");
            clear_visited(grid, &trace);
            return SearchReport::failed(trace, SearchFailure::Exhausted);
        }

        grid.node_mut(current).is_visited = true;
        trace.push(current);

        if current == finish {
            clear_visited(grid, &trace);
            let path = reconstruct_path(grid, finish);
            return SearchReport::found(trace, path);
        }

        for neighbor in grid.neighbors(current, NeighborOrder::Default) {
            let node = grid.node(neighbor);
            if node.is_visited || node.is_wall || !passes_filters(node, filters) {
                continue;
            }
            if node.distance == Node::UNREACHED {
                let next_distance = grid.node(current).distance + 1;
                let neighbor_node = grid.node_mut(neighbor);
                neighbor_node.distance = next_distance;
                neighbor_node.previous = Some(current);
            }
        }
    }

    debug!("[Bfs] exhausted: no route from {start} to {finish}");
    clear_visited(grid, &trace);
    SearchReport::failed(trace, SearchFailure::Exhausted)
}

fn clear_visited(grid: &mut Grid, trace: &[GridCoord]) {
    for &coord in trace {
        grid.node_mut(coord).is_visited = false;
    }
}
