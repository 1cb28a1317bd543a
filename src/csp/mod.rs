//! Generic constraint satisfaction: variables, domains, assignments,
//! constraints, and the backtracking solver.

pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod heuristics;
pub mod solver;
pub mod stats;
pub mod variable;
