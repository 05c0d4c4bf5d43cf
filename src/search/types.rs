//! Search result and filter types.

use crate::core::{GridCoord, Grid, Node};

/// Why a search produced no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Start or finish missing from the grid, or equal to each other.
    BadEndpoints,
    /// The frontier emptied without reaching the finish.
    Exhausted,
}

/// Uniform result of a search run.
///
/// All search variants return the same shape: `found` says whether the
/// finish was reached, `trace` is the visitation order gathered so far
/// (partial on failure), and `path` is the reconstructed start→finish
/// route, empty when no path exists.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Whether the finish node was reached.
    pub found: bool,
    /// Nodes in visitation order.
    pub trace: Vec<GridCoord>,
    /// Start→finish path from walking `previous` links, empty if none.
    pub path: Vec<GridCoord>,
    /// Reason for failure, if any.
    pub failure: Option<SearchFailure>,
}

impl SearchReport {
    /// A successful report with its trace and reconstructed path.
    pub(crate) fn found(trace: Vec<GridCoord>, path: Vec<GridCoord>) -> Self {
        Self {
            found: true,
            trace,
            path,
            failure: None,
        }
    }

    /// A failed report carrying whatever trace was gathered.
    pub(crate) fn failed(trace: Vec<GridCoord>, failure: SearchFailure) -> Self {
        Self {
            found: false,
            trace,
            path: Vec::new(),
            failure: Some(failure),
        }
    }

    /// Path length in cells (0 when no path was found).
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Node attribute a filter can test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeAttribute {
    IsWall,
    IsVisited,
    IsMapped,
}

/// A neighbor-acceptance predicate: the named attribute must equal
/// `evaluation` for the neighbor to be considered.
///
/// The usual use is restricting a search to cells the robot has already
/// mapped: `AttributeFilter::new(NodeAttribute::IsMapped, true)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeFilter {
    pub attribute: NodeAttribute,
    pub evaluation: bool,
}

impl AttributeFilter {
    /// Create a filter requiring `attribute == evaluation`.
    pub const fn new(attribute: NodeAttribute, evaluation: bool) -> Self {
        Self {
            attribute,
            evaluation,
        }
    }

    /// Does `node` satisfy this filter?
    pub fn accepts(&self, node: &Node) -> bool {
        let value = match self.attribute {
            NodeAttribute::IsWall => node.is_wall,
            NodeAttribute::IsVisited => node.is_visited,
            NodeAttribute::IsMapped => node.is_mapped,
        };
        value == self.evaluation
    }
}

/// Does `node` satisfy every filter in the list? An empty list accepts
/// all nodes.
pub(crate) fn passes_filters(node: &Node, filters: &[AttributeFilter]) -> bool {
    filters.iter().all(|f| f.accepts(node))
}

/// Validate endpoints the way every search variant does: both must be
/// inside the grid and distinct.
pub(crate) fn endpoints_valid(grid: &Grid, start: GridCoord, finish: GridCoord) -> bool {
    grid.in_bounds(start) && grid.in_bounds(finish) && start != finish
}
