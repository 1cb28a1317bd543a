//! Word search as a CSP: each word is a variable, its domain the set of
//! in-bounds placements, and a single constraint forbids overlapping
//! cells.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    csp::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        solver::CspSolver,
        variable::Variable,
    },
    error::Result,
};

/// A cell of a rectangular puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridLocation {
    pub row: usize,
    pub column: usize,
}

/// A placement is the ordered cells one word (or one chip) occupies.
pub type Placement = Vec<GridLocation>;

/// Forbids any two placements from sharing a cell.
///
/// Generic over the variable type so that both word-search words and
/// circuit-board chips can use it.
#[derive(Debug, Clone)]
pub struct NoOverlapConstraint<V: Variable> {
    vars: Vec<V>,
}

impl<V: Variable> NoOverlapConstraint<V> {
    pub fn new(vars: Vec<V>) -> Self {
        Self { vars }
    }
}

impl<V: Variable> Constraint<V, Placement> for NoOverlapConstraint<V> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NoOverlapConstraint".to_string(),
            description: format!("no shared cells among {} placements", self.vars.len()),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, Placement>) -> bool {
        let mut occupied = HashSet::new();
        for var in &self.vars {
            if let Some(placement) = assignment.get(var) {
                for location in placement {
                    if !occupied.insert(*location) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Every in-bounds placement of `word` in a `rows` x `columns` grid,
/// running right, down, diagonally down-right, or diagonally down-left.
pub fn generate_placements(word: &str, rows: usize, columns: usize) -> Vec<Placement> {
    let length = word.chars().count();
    let mut placements = Vec::new();
    if length == 0 {
        return placements;
    }

    for row in 0..rows {
        for column in 0..columns {
            if column + length <= columns {
                placements.push(
                    (0..length)
                        .map(|step| GridLocation {
                            row,
                            column: column + step,
                        })
                        .collect(),
                );
                if row + length <= rows {
                    placements.push(
                        (0..length)
                            .map(|step| GridLocation {
                                row: row + step,
                                column: column + step,
                            })
                            .collect(),
                    );
                }
            }
            if row + length <= rows {
                placements.push(
                    (0..length)
                        .map(|step| GridLocation {
                            row: row + step,
                            column,
                        })
                        .collect(),
                );
                if column + 1 >= length {
                    placements.push(
                        (0..length)
                            .map(|step| GridLocation {
                                row: row + step,
                                column: column - step,
                            })
                            .collect(),
                    );
                }
            }
        }
    }
    placements
}

/// Builds a solver placing `words` into a `rows` x `columns` grid without
/// overlaps.
pub fn word_search_solver(
    words: &[&str],
    rows: usize,
    columns: usize,
) -> Result<CspSolver<String, Placement>> {
    let variables: Vec<String> = words.iter().map(|word| word.to_string()).collect();
    let domains: HashMap<String, Vec<Placement>> = words
        .iter()
        .map(|word| (word.to_string(), generate_placements(word, rows, columns)))
        .collect();

    let mut solver = CspSolver::new(variables.clone(), domains)?;
    solver.add_constraint(Box::new(NoOverlapConstraint::new(variables)))?;
    Ok(solver)
}
