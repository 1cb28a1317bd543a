//! Quaero is a generic, reusable library of search and constraint
//! satisfaction engines for discrete puzzle problems.
//!
//! The engines are problem-agnostic: a puzzle plugs in through a small
//! trait surface and gets back either a solution or a definitive "no
//! solution". The core idea is a two-layered architecture: generic engine
//! backends and problem-specific frontends (a collection of worked
//! frontends ships under [`examples`]).
//!
//! # Core Concepts
//!
//! - **[`search::problem::SearchProblem`]**: a trait you implement to
//!   describe a state space: the goal test and the successor function.
//!   [`search::problem::InformedProblem`] adds a heuristic for A*.
//! - **[`search::engine`]**: the traversal engines ([`search::engine::dfs`],
//!   [`search::engine::bfs`], and [`search::engine::astar`]), which return a
//!   [`search::engine::SearchOutcome`] carrying the node tree, the goal (if
//!   reached), and counters.
//! - **[`csp::constraint::Constraint`]**: a rule over a subset of variables,
//!   checked against a partial [`csp::assignment::Assignment`]. A small
//!   standard library ships under [`csp::constraints`].
//! - **[`csp::solver::CspSolver`]**: the backtracking engine that takes
//!   variables, domains, and constraints and searches for a complete
//!   satisfying assignment.
//!
//! # Example: Finding a Path
//!
//! ```
//! use quaero::examples::maze::{Maze, MazeLocation};
//! use quaero::search::engine::bfs;
//!
//! let start = MazeLocation { row: 0, column: 0 };
//! let goal = MazeLocation { row: 2, column: 2 };
//! let maze = Maze::open(3, 3, start, goal);
//!
//! let outcome = bfs(&maze, maze.start());
//! let path = outcome.path().expect("an open maze is solvable");
//!
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! // Four unit steps is the fewest possible on an open 3x3 grid.
//! assert_eq!(outcome.cost(), Some(4));
//! ```
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here the solver works out `?a != ?b` where `?a` can be `1` or `2` and
//! `?b` can only be `1`: it must land on `?a = 2`.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use quaero::csp::constraints::not_equal::NotEqualConstraint;
//! use quaero::csp::solver::CspSolver;
//!
//! let domains: HashMap<&str, Vec<i64>> =
//!     [("a", vec![1, 2]), ("b", vec![1])].into_iter().collect();
//!
//! let mut solver = CspSolver::new(vec!["a", "b"], domains).unwrap();
//! solver
//!     .add_constraint(Box::new(NotEqualConstraint::new("a", "b")))
//!     .unwrap();
//!
//! let (solution, _stats) = solver.solve();
//! let solution = solution.unwrap();
//!
//! assert_eq!(solution.get(&"a"), Some(&2));
//! assert_eq!(solution.get(&"b"), Some(&1));
//! ```
//!
pub mod csp;
pub mod error;
pub mod examples;
pub mod search;
