//! Algorithm registries exposed to host applications.
//!
//! Hosts pick algorithms by name from fixed tables rather than linking
//! against the engine functions directly. The pathfinding table doubles
//! as the cleaning-algorithm list: a cleaning run is a search over the
//! robot's mapped cells.

use rand::thread_rng;

use crate::core::{Grid, GridCoord};
use crate::mapping::{map_grid, MappingConfig, MappingReport};
use crate::search::{astar, bfs, dfs, AttributeFilter, SearchReport};
use crate::walk::{random_walk, WalkConfig, WalkOutcome};

/// A registered search algorithm.
pub struct PathfindingAlgorithm {
    /// Full display name.
    pub name: &'static str,
    /// Short label.
    pub shortened: &'static str,
    /// The search entry point.
    pub func: fn(&mut Grid, GridCoord, GridCoord, &[AttributeFilter]) -> SearchReport,
}

/// A registered mapping algorithm. Mapping has no finish node.
pub struct MappingAlgorithm {
    /// Full display name.
    pub name: &'static str,
    /// Short label.
    pub shortened: &'static str,
    /// The mapping entry point; `None` signals invalid input.
    pub func: fn(&mut Grid, GridCoord) -> Option<MappingReport>,
}

fn horizontal_mapping(grid: &mut Grid, start: GridCoord) -> Option<MappingReport> {
    map_grid(grid, start, &MappingConfig::horizontal())
}

fn vertical_mapping(grid: &mut Grid, start: GridCoord) -> Option<MappingReport> {
    map_grid(grid, start, &MappingConfig::vertical())
}

fn random_walk_mapping(grid: &mut Grid, start: GridCoord) -> Option<MappingReport> {
    let outcome = random_walk(grid, start, &WalkConfig::default(), &mut thread_rng())?;
    let trace = match outcome {
        WalkOutcome::Completed(trace) | WalkOutcome::Stuck(trace) => trace,
    };
    Some(MappingReport {
        trace,
        bridged_jumps: 0,
    })
}

const PATHFINDING: &[PathfindingAlgorithm] = &[
    PathfindingAlgorithm {
        name: "Depth-first Search",
        shortened: "DFS",
        func: dfs,
    },
    PathfindingAlgorithm {
        name: "Breadth-first Search",
        shortened: "BFS",
        func: bfs,
    },
    PathfindingAlgorithm {
        name: "A* Search",
        shortened: "A*",
        func: astar,
    },
];

const MAPPING: &[MappingAlgorithm] = &[
    MappingAlgorithm {
        name: "Horizontal Mapping",
        shortened: "Horizontal",
        func: horizontal_mapping,
    },
    MappingAlgorithm {
        name: "Vertical Mapping",
        shortened: "Vertical",
        func: vertical_mapping,
    },
    MappingAlgorithm {
        name: "Random Walk",
        shortened: "Random",
        func: random_walk_mapping,
    },
];

/// The search algorithms available to hosts.
pub fn pathfinding_algorithms() -> &'static [PathfindingAlgorithm] {
    PATHFINDING
}

/// The mapping algorithms available to hosts.
pub fn mapping_algorithms() -> &'static [MappingAlgorithm] {
    MAPPING
}
