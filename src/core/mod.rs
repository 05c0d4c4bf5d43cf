//! Fundamental types: coordinates, nodes, the grid, and the shared
//! traversal stack.

mod coord;
mod grid;
mod node;
mod stack;

pub use coord::GridCoord;
pub use grid::{Grid, NeighborOrder};
pub use node::{Node, MAX_DUST};
pub use stack::TraversalStack;
