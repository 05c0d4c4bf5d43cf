//! Stack-based exploratory mapping.
//!
//! Explores an unknown grid from a single start with no designated
//! finish, stepping only on cells discovered so far. The traversal is a
//! DFS variant with the parent pointer stamped at encounter time rather
//! than visit time, which means a pop can land on a frontier cell that
//! is not adjacent to the cell just stepped on. A physical robot cannot
//! teleport, so each such jump is repaired by splicing in a shortest
//! route through already-stepped cells (see [`bridge_path`]).

mod bridge;

pub use bridge::bridge_path;

use std::collections::HashSet;

use log::{debug, trace};
use serde::Deserialize;

use crate::core::{Grid, GridCoord, NeighborOrder, TraversalStack};

/// Mapping traversal configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct MappingConfig {
    /// Neighbor emission order; selects the sweep pattern
    /// (default: horizontal).
    #[serde(default = "default_order")]
    pub order: NeighborOrder,

    /// Repair non-adjacent stack jumps by inserting a bridging route
    /// through already-stepped cells (default: true).
    #[serde(default = "default_repair_jumps")]
    pub repair_jumps: bool,
}

fn default_order() -> NeighborOrder {
    NeighborOrder::Horizontal
}

fn default_repair_jumps() -> bool {
    true
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            repair_jumps: default_repair_jumps(),
        }
    }
}

impl MappingConfig {
    /// Preset for the horizontal sweep pattern.
    pub fn horizontal() -> Self {
        Self {
            order: NeighborOrder::Horizontal,
            ..Self::default()
        }
    }

    /// Preset for the vertical sweep pattern.
    pub fn vertical() -> Self {
        Self {
            order: NeighborOrder::Vertical,
            ..Self::default()
        }
    }
}

/// Result of a mapping run.
#[derive(Clone, Debug)]
pub struct MappingReport {
    /// Stepped cells in order. First visits appear exactly once; with
    /// jump repair enabled, bridging segments re-enter already-stepped
    /// cells, so duplicates are expected.
    pub trace: Vec<GridCoord>,
    /// Number of non-adjacent stack jumps encountered.
    pub bridged_jumps: usize,
}

/// Explore every cell reachable from `start`.
///
/// Returns `None` when `start` is outside the grid or a wall. Every
/// reachable non-wall cell is recorded exactly once as a first visit;
/// parent pointers are stamped on every neighbor encounter, last writer
/// wins, independent of whether the neighbor is pushed.
pub fn map_grid(grid: &mut Grid, start: GridCoord, config: &MappingConfig) -> Option<MappingReport> {
    if !grid.in_bounds(start) || grid.node(start).is_wall {
        debug!("[Mapping] bad start node {start}");
        return None;
    }

    grid.reset_search_state();

    let mut stack = TraversalStack::new();
    let mut recorded: HashSet<GridCoord> = HashSet::new();
    let mut report = MappingReport {
        trace: Vec::new(),
        bridged_jumps: 0,
    };
    stack.push(start);

    while let Some(current) = stack.pop() {
        if recorded.contains(&current) {
            continue;
        }

        // The traversal's prior node is the cell last stepped on. A pop
        // whose recorded parent differs landed across the grid.
        let prior_step = report.trace.last().copied();
        if let Some(prior) = prior_step {
            if grid.node(current).previous != Some(prior) {
                report.bridged_jumps += 1;
                trace!("[Mapping] stack jump from {prior} to {current}");
                if config.repair_jumps {
                    if let Some(route) = bridge_path(grid, &recorded, prior, current) {
                        // Interior cells only; prior is already in the
                        // trace and current is appended below.
                        report.trace.extend_from_slice(&route[1..route.len() - 1]);
                    }
                }
            }
        }

        recorded.insert(current);
        report.trace.push(current);

        for neighbor in grid.open_neighbors(current, config.order) {
            if !recorded.contains(&neighbor) {
                stack.push(neighbor);
            }
            grid.node_mut(neighbor).previous = Some(current);
        }
    }

    debug!(
        "[Mapping] explored {} cells, {} jumps bridged",
        recorded.len(),
        report.bridged_jumps
    );
    Some(report)
}
