//! n-queens as a CSP: one variable per column holding the queen's row, and
//! a single global constraint forbidding attacks.

use std::collections::HashMap;

use crate::{
    csp::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        solver::CspSolver,
    },
    error::Result,
};

pub type Column = u32;
pub type Row = u32;

/// Two queens attack when they share a row or a diagonal. Sharing a column
/// is impossible by construction, since each column is one variable.
#[derive(Debug, Clone)]
pub struct QueensConstraint {
    columns: Vec<Column>,
}

impl QueensConstraint {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

impl Constraint<Column, Row> for QueensConstraint {
    fn variables(&self) -> &[Column] {
        &self.columns
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "QueensConstraint".to_string(),
            description: format!("no attacks among {} columns", self.columns.len()),
        }
    }

    fn satisfied(&self, assignment: &Assignment<Column, Row>) -> bool {
        let queens: Vec<(Column, Row)> = self
            .columns
            .iter()
            .filter_map(|column| assignment.get(column).map(|row| (*column, *row)))
            .collect();

        for (i, &(first_column, first_row)) in queens.iter().enumerate() {
            for &(second_column, second_row) in &queens[i + 1..] {
                if first_row == second_row {
                    return false;
                }
                if first_column.abs_diff(second_column) == first_row.abs_diff(second_row) {
                    return false;
                }
            }
        }
        true
    }
}

/// Builds the n-queens solver: columns `1..=n`, each with row domain
/// `1..=n`.
pub fn queens_solver(n: u32) -> Result<CspSolver<Column, Row>> {
    let columns: Vec<Column> = (1..=n).collect();
    let rows: Vec<Row> = (1..=n).collect();
    let domains: HashMap<Column, Vec<Row>> =
        columns.iter().map(|&column| (column, rows.clone())).collect();

    let mut solver = CspSolver::new(columns.clone(), domains)?;
    solver.add_constraint(Box::new(QueensConstraint::new(columns)))?;
    Ok(solver)
}
