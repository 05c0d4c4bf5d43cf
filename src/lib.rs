//! # DhuliSim: Grid-World Sweeping-Robot Simulation Core
//!
//! The computation layer behind a grid-world robot visualizer: a user
//! edits walls and dust on a rectangular grid, then a simulated robot
//! either searches for a route between two cells, explores the grid to
//! build its own map, or wanders at random. The crate owns the grid
//! data model, the search and mapping algorithms, and the playback
//! scheduler that replays a computed trace against the grid and the
//! robot's battery over time. Rendering, input handling, and layout
//! persistence belong to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use dhuli_sim::core::{Grid, GridCoord};
//! use dhuli_sim::search::bfs;
//!
//! let mut grid = Grid::new(25, 50);
//! let (start, finish) = grid.default_endpoints();
//! grid.toggle_wall(GridCoord::new(12, 20));
//!
//! let report = bfs(&mut grid, start, finish, &[]);
//! assert!(report.found);
//! println!("visited {} cells, path of {}", report.trace.len(), report.path_len());
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: grid storage, nodes, coordinates, the shared traversal stack
//! - [`search`]: BFS, DFS, and A* with a uniform result shape
//! - [`mapping`]: stack-based exploration with jump repair
//! - [`walk`]: bounded random walk with a typed stuck outcome
//! - [`playback`]: step budget, sweep inflation, token-checked scheduler
//! - [`registry`]: the algorithm tables hosts pick from
//! - [`config`]: TOML-loadable simulation configuration
//!
//! ## Data Flow
//!
//! ```text
//! host ──(grid, start, finish)──▶ search / mapping / walk
//!                                       │ trace
//!                                       ▼
//!                    Scheduler::begin ──▶ Playback::advance(now)
//!                                       │ mutates grid + robot map,
//!                                       │ spends the step budget
//!                                       ▼
//!                                 PlaybackState::Finished
//! ```
//!
//! Two grids exist per simulation: the user-edited ground truth and the
//! robot's own knowledge map ([`core::Grid::blank_map`]), which only
//! gains cells through map-mode playback.

pub mod config;
pub mod core;
pub mod error;
pub mod mapping;
pub mod playback;
pub mod registry;
pub mod search;
pub mod walk;

pub use config::{GridConfig, SimConfig};
pub use core::{Grid, GridCoord, NeighborOrder, Node, TraversalStack, MAX_DUST};
pub use error::{DhuliError, Result};
pub use mapping::{bridge_path, map_grid, MappingConfig, MappingReport};
pub use playback::{
    inflate_by_dust, Playback, PlaybackConfig, PlaybackMode, PlaybackState, RunToken, Scheduler,
    StepBudget,
};
pub use registry::{
    mapping_algorithms, pathfinding_algorithms, MappingAlgorithm, PathfindingAlgorithm,
};
pub use search::{
    astar, bfs, dfs, reconstruct_path, AttributeFilter, NodeAttribute, SearchFailure, SearchReport,
};
pub use walk::{random_walk, WalkConfig, WalkOutcome};
