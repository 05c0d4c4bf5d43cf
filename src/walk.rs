//! Unguided random walk.
//!
//! Bounded-length exploration with no target: at each step the robot
//! moves to a uniformly random non-wall neighbor. There is no finish
//! node in this contract; the walk ends when the step budget is used up
//! or the robot boxes itself into a cell with no open neighbors.

use log::debug;
use rand::Rng;
use serde::Deserialize;

use crate::core::{Grid, GridCoord, NeighborOrder};

/// Random walk configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct WalkConfig {
    /// Number of steps to take (default: 2000).
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_max_steps() -> usize {
    2000
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

/// How a walk ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// All steps were taken; the trace holds every visited cell.
    Completed(Vec<GridCoord>),
    /// The walk reached a cell with no open neighbors; the trace holds
    /// the steps taken up to that point.
    Stuck(Vec<GridCoord>),
}

impl WalkOutcome {
    /// The visitation trace regardless of how the walk ended.
    pub fn trace(&self) -> &[GridCoord] {
        match self {
            WalkOutcome::Completed(trace) | WalkOutcome::Stuck(trace) => trace,
        }
    }
}

/// Walk `config.max_steps` random steps from `start`.
///
/// Returns `None` when `start` is outside the grid or a wall.
pub fn random_walk(
    grid: &Grid,
    start: GridCoord,
    config: &WalkConfig,
    rng: &mut impl Rng,
) -> Option<WalkOutcome> {
    if !grid.in_bounds(start) || grid.node(start).is_wall {
        debug!("[Walk] bad start node {start}");
        return None;
    }

    let mut current = start;
    let mut trace = Vec::with_capacity(config.max_steps);
    for _ in 0..config.max_steps {
        trace.push(current);
        let neighbors = grid.open_neighbors(current, NeighborOrder::Default);
        if neighbors.is_empty() {
            debug!("[Walk] stuck at {current} after {} steps", trace.len());
            return Some(WalkOutcome::Stuck(trace));
        }
        current = neighbors[rng.gen_range(0..neighbors.len())];
    }
    Some(WalkOutcome::Completed(trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_walk_takes_exact_step_count() {
        let grid = Grid::new(5, 5);
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = random_walk(
            &grid,
            GridCoord::new(2, 2),
            &WalkConfig::default(),
            &mut rng,
        )
        .expect("valid start");
        let trace = match outcome {
            WalkOutcome::Completed(trace) => trace,
            WalkOutcome::Stuck(_) => panic!("open grid cannot strand the walk"),
        };
        assert_eq!(trace.len(), 2000);
        for pair in trace.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn test_walk_reports_stuck_when_enclosed() {
        let mut grid = Grid::new(3, 3);
        let start = GridCoord::new(1, 1);
        for n in grid.neighbors(start, NeighborOrder::Default) {
            grid.toggle_wall(n);
        }
        let mut rng = StdRng::seed_from_u64(7);
        let outcome =
            random_walk(&grid, start, &WalkConfig::default(), &mut rng).expect("valid start");
        assert_eq!(outcome, WalkOutcome::Stuck(vec![start]));
    }

    #[test]
    fn test_walk_is_reproducible_with_seed() {
        let grid = Grid::new(4, 4);
        let start = GridCoord::new(0, 0);
        let config = WalkConfig { max_steps: 50 };
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = random_walk(&grid, start, &config, &mut a).expect("valid start");
        let second = random_walk(&grid, start, &config, &mut b).expect("valid start");
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_rejects_wall_start() {
        let mut grid = Grid::new(3, 3);
        let start = GridCoord::new(0, 0);
        grid.toggle_wall(start);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_walk(&grid, start, &WalkConfig::default(), &mut rng).is_none());
    }
}
