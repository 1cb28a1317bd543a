//! Generic state-space search: problems, frontiers, nodes, and the
//! traversal engines.

pub mod engine;
pub mod frontier;
pub mod node;
pub mod problem;
