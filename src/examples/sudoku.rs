//! Sudoku as a CSP: 81 cell variables, given cells as singleton domains,
//! and 27 [`AllDifferentConstraint`]s covering rows, columns, and boxes.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::{
    csp::{
        assignment::Assignment, constraints::all_different::AllDifferentConstraint,
        solver::CspSolver,
    },
    error::Result,
};

/// One cell of the 9x9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: u8,
    pub column: u8,
}

/// Builds a sudoku solver from a 9x9 givens grid, `0` meaning empty.
///
/// Givens become singleton domains rather than seed bindings, so the same
/// solver definition covers both solving and validating a puzzle.
pub fn sudoku_solver(givens: &[[u8; 9]; 9]) -> Result<CspSolver<GridCell, u8>> {
    let mut variables = Vec::with_capacity(81);
    let mut domains: HashMap<GridCell, Vec<u8>> = HashMap::with_capacity(81);
    for row in 0..9u8 {
        for column in 0..9u8 {
            let cell = GridCell { row, column };
            variables.push(cell);
            let given = givens[row as usize][column as usize];
            let domain = if given == 0 {
                (1..=9).collect()
            } else {
                vec![given]
            };
            domains.insert(cell, domain);
        }
    }

    let mut solver = CspSolver::new(variables, domains)?;
    for index in 0..9u8 {
        let row_group: Vec<GridCell> = (0..9u8)
            .map(|column| GridCell { row: index, column })
            .collect();
        let column_group: Vec<GridCell> = (0..9u8)
            .map(|row| GridCell { row, column: index })
            .collect();
        solver.add_constraint(Box::new(AllDifferentConstraint::new(row_group)))?;
        solver.add_constraint(Box::new(AllDifferentConstraint::new(column_group)))?;
    }
    for box_row in 0..3u8 {
        for box_column in 0..3u8 {
            let box_group: Vec<GridCell> = (0..3u8)
                .flat_map(|r| {
                    (0..3u8).map(move |c| GridCell {
                        row: box_row * 3 + r,
                        column: box_column * 3 + c,
                    })
                })
                .collect();
            solver.add_constraint(Box::new(AllDifferentConstraint::new(box_group)))?;
        }
    }
    Ok(solver)
}

/// Renders a solved grid row by row.
pub fn render_grid(solution: &Assignment<GridCell, u8>) -> String {
    let mut out = String::with_capacity(90);
    for row in 0..9u8 {
        for column in 0..9u8 {
            let digit = solution
                .get(&GridCell { row, column })
                .copied()
                .unwrap_or(0);
            let _ = write!(out, "{}", digit);
        }
        out.push('\n');
    }
    out
}
