pub mod node_chain;
pub mod sequence;

pub use node_chain::{Direction, Node, NodeChain, Traversal};
pub use sequence::{Sequence, SequenceUpdate};
