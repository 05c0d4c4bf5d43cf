//! Graph search over the grid: BFS, DFS, and A*.
//!
//! All variants share one result shape ([`SearchReport`]) and one
//! failure taxonomy ([`SearchFailure`]): malformed endpoints and
//! frontier exhaustion are reported, never thrown. Every run begins
//! with a full reset pass over the grid's transient search state.

mod astar;
mod bfs;
mod dfs;
mod types;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use types::{AttributeFilter, NodeAttribute, SearchFailure, SearchReport};

use crate::core::{Grid, GridCoord};

/// Reconstruct the start→finish path by walking `previous` links back
/// from `finish` and reversing. Empty if `finish` has no parent chain.
pub fn reconstruct_path(grid: &Grid, finish: GridCoord) -> Vec<GridCoord> {
    let mut path = Vec::new();
    let mut current = Some(finish);
    while let Some(coord) = current {
        path.push(coord);
        current = grid.node(coord).previous;
    }
    path.reverse();
    path
}
