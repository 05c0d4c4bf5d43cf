//! Sweep-mode trace inflation.

use std::collections::HashSet;

use crate::core::{Grid, GridCoord};

/// Expand a visitation trace for sweep playback.
///
/// The first occurrence of each node is replicated `dust + 1` times so
/// dusty cells take visibly longer to clean; later occurrences stay
/// single entries because the dust is already gone by then.
pub fn inflate_by_dust(grid: &Grid, trace: &[GridCoord]) -> Vec<GridCoord> {
    let mut seen: HashSet<GridCoord> = HashSet::new();
    let mut inflated = Vec::with_capacity(trace.len());
    for &coord in trace {
        if seen.insert(coord) {
            let repeats = grid.node(coord).dust as usize + 1;
            inflated.extend(std::iter::repeat(coord).take(repeats));
        } else {
            inflated.push(coord);
        }
    }
    inflated
}
