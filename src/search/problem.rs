use crate::search::node::Cost;

/// The base trait for any state a search can move through.
///
/// A state must be cloneable, debuggable, equatable, and hashable; the
/// engines rely on equality and hashing to detect revisits and to index the
/// explored set. This is a marker trait, so any type that satisfies these
/// bounds implements `SearchState`.
pub trait SearchState: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> SearchState for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// A trait that defines the "frontend" for a specific search problem.
///
/// This is the interface for connecting a concrete state space (a maze, a
/// river-crossing puzzle, a sliding-tile board) to the generic engines in
/// [`crate::search::engine`]. The implementor supplies the state type, the
/// goal predicate, and the successor function; the engines supply the
/// traversal.
///
/// The successor function must be pure: calling it twice on the same state
/// must yield the same sequence. On an unbounded state space with no
/// reachable goal the engines do not terminate; bounding the space is the
/// caller's responsibility.
pub trait SearchProblem {
    /// The concrete state type being searched over.
    type State: SearchState;

    /// Returns `true` if `state` satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All states reachable from `state` in one move.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A search problem that can also estimate remaining cost to a goal.
///
/// [`crate::search::engine::astar`] requires this. The estimate must be
/// admissible (it must never exceed the true remaining cost) for the
/// returned path to be optimal. That precondition is the implementor's
/// responsibility; the engine does not (and cannot) enforce it.
pub trait InformedProblem: SearchProblem {
    /// An admissible estimate of the cost from `state` to the nearest goal.
    fn heuristic(&self, state: &Self::State) -> Cost;
}
