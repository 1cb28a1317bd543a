//! The traversal algorithms: depth-first, breadth-first, and A*.
//!
//! All three are iterative loops over an explicit [`Frontier`], so memory
//! use is bounded by the frontier and node arena rather than call depth.
//! Each call owns its explored set and arena exclusively; nothing is shared
//! across invocations.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::search::{
    frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier},
    node::{Cost, NodeArena, NodeId, SearchNode},
    problem::{InformedProblem, SearchProblem, SearchState},
};

/// Counters gathered over one engine invocation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier and goal-tested.
    pub nodes_expanded: u64,
    /// Nodes created, root included.
    pub nodes_generated: u64,
    /// High-water mark of the frontier size.
    pub frontier_peak: u64,
}

/// Everything one search call produced.
///
/// `goal` is `None` when the frontier emptied without reaching a goal:
/// a normal outcome callers must branch on, not an error. The arena holds
/// the full node tree, so the winning path can be reconstructed after the
/// call returns.
#[derive(Debug)]
pub struct SearchOutcome<S> {
    /// Every node created during the search.
    pub arena: NodeArena<S>,
    /// The terminal node, if a goal was reached.
    pub goal: Option<NodeId>,
    /// Counters for this invocation.
    pub stats: SearchStats,
}

impl<S: SearchState> SearchOutcome<S> {
    /// Returns `true` if the search terminated on a goal state.
    pub fn is_goal_reached(&self) -> bool {
        self.goal.is_some()
    }

    /// The terminal node, if any.
    pub fn goal_node(&self) -> Option<&SearchNode<S>> {
        self.goal.map(|id| self.arena.get(id))
    }

    /// The path `[initial_state, .., goal_state]`, if a goal was reached.
    pub fn path(&self) -> Option<Vec<S>> {
        self.goal.map(|id| self.arena.path_to(id))
    }

    /// Accumulated cost of the winning path, if a goal was reached.
    pub fn cost(&self) -> Option<Cost> {
        self.goal_node().map(|node| node.cost)
    }
}

/// Depth-first search: LIFO frontier, so one branch is driven to exhaustion
/// before its siblings are considered.
///
/// Finds *a* path when one exists; the path need not be shortest.
pub fn dfs<P: SearchProblem>(problem: &P, initial: P::State) -> SearchOutcome<P::State> {
    traverse(problem, initial, StackFrontier::new())
}

/// Breadth-first search: FIFO frontier.
///
/// States are marked explored the moment they are discovered, so with a
/// FIFO frontier the first goal reached is guaranteed to lie on a path with
/// the fewest edges from the initial state.
pub fn bfs<P: SearchProblem>(problem: &P, initial: P::State) -> SearchOutcome<P::State> {
    traverse(problem, initial, QueueFrontier::new())
}

/// The expansion loop shared by [`dfs`] and [`bfs`]; only the frontier
/// discipline differs.
fn traverse<P, F>(problem: &P, initial: P::State, mut frontier: F) -> SearchOutcome<P::State>
where
    P: SearchProblem,
    F: Frontier<NodeId>,
{
    let mut arena = NodeArena::new();
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();

    explored.insert(initial.clone());
    let root = arena.insert(SearchNode {
        state: initial,
        parent: None,
        cost: 0,
        heuristic: 0,
    });
    stats.nodes_generated += 1;
    frontier.push(root);
    stats.frontier_peak = 1;

    while let Some(current) = frontier.pop() {
        stats.nodes_expanded += 1;
        let state = arena.get(current).state.clone();

        if problem.is_goal(&state) {
            debug!(nodes_expanded = stats.nodes_expanded, "goal reached");
            return SearchOutcome {
                arena,
                goal: Some(current),
                stats,
            };
        }

        let child_cost = arena.get(current).cost + 1;
        for successor in problem.successors(&state) {
            // Mark explored at discovery, not at expansion. For BFS this is
            // what makes the first goal reached a fewest-edges goal.
            if !explored.insert(successor.clone()) {
                continue;
            }
            let child = arena.insert(SearchNode {
                state: successor,
                parent: Some(current),
                cost: child_cost,
                heuristic: 0,
            });
            stats.nodes_generated += 1;
            frontier.push(child);
            stats.frontier_peak = stats.frontier_peak.max(frontier.len() as u64);
        }
    }

    debug!(
        nodes_expanded = stats.nodes_expanded,
        "frontier exhausted without reaching a goal"
    );
    SearchOutcome {
        arena,
        goal: None,
        stats,
    }
}

/// An entry awaiting expansion on the A* frontier.
///
/// Ordering is lexicographic: `f` first, then node id. Ids are assigned in
/// creation order, so entries with equal `f` pop oldest-first; this is the
/// documented, deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: Cost,
    id: NodeId,
}

/// Best-first (A*) search under uniform unit edge costs.
///
/// The map from state to best known cost-so-far is authoritative: a
/// successor is pushed only when it is unseen or reached more cheaply than
/// before. A state can therefore sit on the frontier several times with
/// different costs; stale, higher-cost entries are not removed. When one
/// is popped, every successor it proposes fails the improvement test.
///
/// Returns the instant a popped node satisfies the goal test. The result
/// is a minimum-cost path only if [`InformedProblem::heuristic`] is
/// admissible, which is the caller's responsibility.
pub fn astar<P: InformedProblem>(problem: &P, initial: P::State) -> SearchOutcome<P::State> {
    let mut arena = NodeArena::new();
    let mut best_cost: HashMap<P::State, Cost> = HashMap::new();
    let mut frontier: PriorityFrontier<OpenEntry> = PriorityFrontier::new();
    let mut stats = SearchStats::default();

    let h = problem.heuristic(&initial);
    best_cost.insert(initial.clone(), 0);
    let root = arena.insert(SearchNode {
        state: initial,
        parent: None,
        cost: 0,
        heuristic: h,
    });
    stats.nodes_generated += 1;
    frontier.push(OpenEntry {
        f: arena.get(root).f_cost(),
        id: root,
    });
    stats.frontier_peak = 1;

    while let Some(OpenEntry { id: current, .. }) = frontier.pop() {
        stats.nodes_expanded += 1;
        let state = arena.get(current).state.clone();

        if problem.is_goal(&state) {
            debug!(
                nodes_expanded = stats.nodes_expanded,
                cost = arena.get(current).cost,
                "goal reached"
            );
            return SearchOutcome {
                arena,
                goal: Some(current),
                stats,
            };
        }

        let new_cost = arena.get(current).cost + 1;
        for successor in problem.successors(&state) {
            let improved = match best_cost.get(&successor) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if !improved {
                continue;
            }
            best_cost.insert(successor.clone(), new_cost);
            let h = problem.heuristic(&successor);
            let child = arena.insert(SearchNode {
                state: successor,
                parent: Some(current),
                cost: new_cost,
                heuristic: h,
            });
            stats.nodes_generated += 1;
            frontier.push(OpenEntry {
                f: arena.get(child).f_cost(),
                id: child,
            });
            stats.frontier_peak = stats.frontier_peak.max(frontier.len() as u64);
        }
    }

    debug!(
        nodes_expanded = stats.nodes_expanded,
        "frontier exhausted without reaching a goal"
    );
    SearchOutcome {
        arena,
        goal: None,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    // --- Test Setup ---

    /// A small directed graph with a named goal state.
    struct GraphProblem {
        edges: HashMap<&'static str, Vec<&'static str>>,
        goal: &'static str,
    }

    impl GraphProblem {
        fn new(edges: &[(&'static str, &[&'static str])], goal: &'static str) -> Self {
            Self {
                edges: edges.iter().map(|(from, to)| (*from, to.to_vec())).collect(),
                goal,
            }
        }
    }

    impl SearchProblem for GraphProblem {
        type State = &'static str;

        fn is_goal(&self, state: &Self::State) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &Self::State) -> Vec<Self::State> {
            self.edges.get(state).cloned().unwrap_or_default()
        }
    }

    /// A graph problem with a per-state heuristic table.
    struct InformedGraph {
        graph: GraphProblem,
        estimates: HashMap<&'static str, Cost>,
    }

    impl SearchProblem for InformedGraph {
        type State = &'static str;

        fn is_goal(&self, state: &Self::State) -> bool {
            self.graph.is_goal(state)
        }

        fn successors(&self, state: &Self::State) -> Vec<Self::State> {
            self.graph.successors(state)
        }
    }

    impl InformedProblem for InformedGraph {
        fn heuristic(&self, state: &Self::State) -> Cost {
            self.estimates.get(state).copied().unwrap_or(0)
        }
    }

    fn is_successor(problem: &GraphProblem, from: &&'static str, to: &&'static str) -> bool {
        problem.successors(from).contains(to)
    }

    // --- Tests ---

    #[test]
    fn bfs_returns_fewest_edge_path() {
        // Two routes to the goal: a long chain and a two-edge shortcut.
        let problem = GraphProblem::new(
            &[
                ("a", &["b", "x"]),
                ("b", &["c"]),
                ("c", &["d"]),
                ("d", &["goal"]),
                ("x", &["goal"]),
            ],
            "goal",
        );

        let outcome = bfs(&problem, "a");
        assert_eq!(outcome.path(), Some(vec!["a", "x", "goal"]));
        assert_eq!(outcome.cost(), Some(2));
    }

    #[test]
    fn dfs_path_is_a_contiguous_successor_chain() {
        let problem = GraphProblem::new(
            &[
                ("a", &["b", "x"]),
                ("b", &["c"]),
                ("c", &["goal"]),
                ("x", &["goal"]),
            ],
            "goal",
        );

        let outcome = dfs(&problem, "a");
        let path = outcome.path().expect("goal is reachable");

        assert_eq!(path.first(), Some(&"a"));
        assert_eq!(path.last(), Some(&"goal"));
        for pair in path.windows(2) {
            assert!(is_successor(&problem, &pair[0], &pair[1]));
        }
    }

    #[test]
    fn initial_state_already_satisfying_goal_returns_single_state_path() {
        let problem = GraphProblem::new(&[("a", &["b"])], "a");

        for outcome in [dfs(&problem, "a"), bfs(&problem, "a")] {
            assert!(outcome.is_goal_reached());
            assert_eq!(outcome.path(), Some(vec!["a"]));
            assert_eq!(outcome.cost(), Some(0));
        }
    }

    #[test]
    fn unreachable_goal_is_a_normal_none_outcome() {
        let problem = GraphProblem::new(&[("a", &["b"]), ("b", &[])], "nowhere");

        let outcome = bfs(&problem, "a");
        assert!(!outcome.is_goal_reached());
        assert_eq!(outcome.path(), None);
        assert_eq!(outcome.cost(), None);
        // The whole (finite) space was still explored.
        assert_eq!(outcome.stats.nodes_generated, 2);
    }

    #[test]
    fn states_are_marked_explored_at_discovery_not_expansion() {
        // Diamond: d is reachable via b and via c, but must be generated once.
        let problem = GraphProblem::new(
            &[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &[])],
            "nowhere",
        );

        let outcome = bfs(&problem, "a");
        assert_eq!(outcome.stats.nodes_generated, 4);
    }

    #[test]
    fn astar_finds_minimum_cost_path_and_supersedes_stale_entries() {
        // d is first reached through the b-chain at cost 3, then improved
        // to cost 2 through e. The stale cost-3 frontier entry for d is
        // popped later and proposes nothing.
        let problem = InformedGraph {
            graph: GraphProblem::new(
                &[
                    ("a", &["b", "e"]),
                    ("b", &["c"]),
                    ("c", &["d"]),
                    ("d", &["g"]),
                    ("e", &["d"]),
                ],
                "g",
            ),
            estimates: [("e", 2), ("d", 0)].into_iter().collect(),
        };

        let outcome = astar(&problem, "a");
        assert_eq!(outcome.path(), Some(vec!["a", "e", "d", "g"]));
        assert_eq!(outcome.cost(), Some(3));
        // a, b, e, c, d (via c), d (improved via e), g
        assert_eq!(outcome.stats.nodes_generated, 7);
    }

    #[test]
    fn astar_equal_f_entries_pop_in_creation_order() {
        let mut arena: NodeArena<&'static str> = NodeArena::new();
        let older = arena.insert(SearchNode {
            state: "older",
            parent: None,
            cost: 1,
            heuristic: 4,
        });
        let newer = arena.insert(SearchNode {
            state: "newer",
            parent: None,
            cost: 2,
            heuristic: 3,
        });

        let mut frontier = PriorityFrontier::new();
        frontier.push(OpenEntry { f: 5, id: newer });
        frontier.push(OpenEntry { f: 5, id: older });

        assert_eq!(frontier.pop().map(|entry| entry.id), Some(older));
        assert_eq!(frontier.pop().map(|entry| entry.id), Some(newer));
    }

    #[test]
    fn astar_on_goal_initial_state_does_no_expansion_work() {
        let problem = InformedGraph {
            graph: GraphProblem::new(&[("a", &["b"])], "a"),
            estimates: HashMap::new(),
        };

        let outcome = astar(&problem, "a");
        assert_eq!(outcome.path(), Some(vec!["a"]));
        assert_eq!(outcome.stats.nodes_expanded, 1);
        assert_eq!(outcome.stats.nodes_generated, 1);
    }
}
