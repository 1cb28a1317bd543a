//! Circuit-board layout as a CSP: rectangular chips packed onto a grid
//! without overlap. Structurally the word search with rectangles instead
//! of letter runs.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    csp::solver::CspSolver,
    error::Result,
    examples::word_search::{GridLocation, NoOverlapConstraint, Placement},
};

/// A rectangular chip to place. `id` keeps two chips of the same size
/// distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Chip {
    pub id: u32,
    pub width: usize,
    pub height: usize,
}

/// Every in-bounds placement of a `width` x `height` chip, anchored at its
/// top-left corner.
pub fn chip_placements(
    width: usize,
    height: usize,
    rows: usize,
    columns: usize,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    if width == 0 || height == 0 || height > rows || width > columns {
        return placements;
    }
    for row in 0..=(rows - height) {
        for column in 0..=(columns - width) {
            placements.push(
                (0..height)
                    .flat_map(|dr| {
                        (0..width).map(move |dc| GridLocation {
                            row: row + dr,
                            column: column + dc,
                        })
                    })
                    .collect(),
            );
        }
    }
    placements
}

/// Builds a solver packing chips of the given `(width, height)` sizes onto
/// a `rows` x `columns` board.
pub fn circuit_board_solver(
    sizes: &[(usize, usize)],
    rows: usize,
    columns: usize,
) -> Result<CspSolver<Chip, Placement>> {
    let chips: Vec<Chip> = sizes
        .iter()
        .enumerate()
        .map(|(id, &(width, height))| Chip {
            id: id as u32,
            width,
            height,
        })
        .collect();
    let domains: HashMap<Chip, Vec<Placement>> = chips
        .iter()
        .map(|&chip| (chip, chip_placements(chip.width, chip.height, rows, columns)))
        .collect();

    let mut solver = CspSolver::new(chips.clone(), domains)?;
    solver.add_constraint(Box::new(NoOverlapConstraint::new(chips)))?;
    Ok(solver)
}
