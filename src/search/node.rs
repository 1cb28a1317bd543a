//! Search nodes, the arena that owns them, and path reconstruction.
//!
//! Nodes form a tree rooted at the initial state. A node refers to its
//! parent by index into the arena rather than by owned reference, so the
//! tree has no ownership cycles: the arena owns every node for the duration
//! of one search call, and parent links are plain non-owning indices.

use crate::search::problem::SearchState;

/// Path and heuristic costs. Integer, so ordering stays total on the heap.
pub type Cost = u64;

/// Index of a node within a [`NodeArena`].
///
/// Ids are handed out in creation order, which makes them double as the
/// discovery-order tie-break key for best-first frontiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node in the search tree.
///
/// `parent` is `None` only for the root. Once created, a node is never
/// mutated.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// The state this node wraps.
    pub state: S,
    /// Arena index of the node this one was expanded from.
    pub parent: Option<NodeId>,
    /// Accumulated path cost from the root.
    pub cost: Cost,
    /// Heuristic estimate of remaining cost (zero for uninformed search).
    pub heuristic: Cost,
}

impl<S> SearchNode<S> {
    /// The best-first ordering key: accumulated cost plus estimate.
    pub fn f_cost(&self) -> Cost {
        self.cost.saturating_add(self.heuristic)
    }
}

/// Append-only store of every node created during one search call.
///
/// The arena is scoped to a single invocation; nothing survives across
/// calls except what the caller copies out of it.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: SearchState> NodeArena<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Stores a node and returns its id. Ids increase monotonically.
    pub fn insert(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstructs the path from the root to `id`.
    ///
    /// Walks parent links back to the root, then reverses, yielding
    /// `[initial_state, .., goal_state]`. Pure; O(path length).
    pub fn path_to(&self, id: NodeId) -> Vec<S> {
        let mut path = vec![self.get(id).state.clone()];
        let mut current = id;
        while let Some(parent) = self.get(current).parent {
            path.push(self.get(parent).state.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

impl<S: SearchState> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> std::ops::Index<NodeId> for NodeArena<S> {
    type Output = SearchNode<S>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id)
    }
}
