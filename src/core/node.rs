//! Node cell record.
//!
//! A node carries both persistent editing state (walls, dust) and
//! transient per-run search state (distance, visitation marks, parent
//! links). Grids are reused across runs, so every algorithm invocation
//! starts with a reset pass over the transient fields.

use super::coord::GridCoord;

/// Maximum dust level a node can accumulate.
pub const MAX_DUST: u8 = 9;

/// A single grid cell with search and mapping metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Cell cannot be entered or traversed.
    pub is_wall: bool,
    /// Transient visitation mark used during a search run.
    pub is_visited: bool,
    /// Known to the robot (robot-map knowledge flag).
    pub is_mapped: bool,
    /// Accumulated dust, 0..=9. Cleaning cost in sweep mode.
    pub dust: u8,
    /// Hop distance from the start node. `UNREACHED` until relaxed.
    pub distance: u32,
    /// A* priority: `distance` + Manhattan heuristic to the finish.
    pub heuristic_distance: u32,
    /// Parent link for path reconstruction.
    pub previous: Option<GridCoord>,
}

impl Node {
    /// Sentinel distance for a node no search has reached yet.
    pub const UNREACHED: u32 = u32::MAX;

    /// Clear all transient search state, leaving walls, dust and the
    /// mapped flag untouched.
    pub fn reset_search_state(&mut self) {
        self.distance = Self::UNREACHED;
        self.heuristic_distance = Self::UNREACHED;
        self.is_visited = false;
        self.previous = None;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            is_wall: false,
            is_visited: false,
            is_mapped: false,
            dust: 0,
            distance: Self::UNREACHED,
            heuristic_distance: Self::UNREACHED,
            previous: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_node_is_unreached() {
        let node = Node::default();
        assert_eq!(node.distance, Node::UNREACHED);
        assert!(!node.is_wall);
        assert!(!node.is_mapped);
        assert_eq!(node.dust, 0);
    }

    #[test]
    fn test_reset_preserves_editing_state() {
        let mut node = Node {
            is_wall: true,
            is_visited: true,
            is_mapped: true,
            dust: 4,
            distance: 7,
            heuristic_distance: 9,
            previous: Some(GridCoord::new(1, 1)),
        };
        node.reset_search_state();
        assert!(node.is_wall);
        assert!(node.is_mapped);
        assert_eq!(node.dust, 4);
        assert_eq!(node.distance, Node::UNREACHED);
        assert_eq!(node.heuristic_distance, Node::UNREACHED);
        assert!(!node.is_visited);
        assert!(node.previous.is_none());
    }
}
