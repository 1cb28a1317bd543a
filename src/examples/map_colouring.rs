//! Colouring the map of Australia: one variable per region, one
//! [`NotEqualConstraint`] per land border.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    csp::{constraints::not_equal::NotEqualConstraint, solver::CspSolver},
    error::Result,
};

/// The seven regions of the puzzle, in the order the solver branches on
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    WesternAustralia,
    NorthernTerritory,
    SouthAustralia,
    Queensland,
    NewSouthWales,
    Victoria,
    Tasmania,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

pub const REGIONS: [Region; 7] = [
    Region::WesternAustralia,
    Region::NorthernTerritory,
    Region::SouthAustralia,
    Region::Queensland,
    Region::NewSouthWales,
    Region::Victoria,
    Region::Tasmania,
];

/// Land borders between regions.
pub const ADJACENCIES: [(Region, Region); 10] = [
    (Region::WesternAustralia, Region::NorthernTerritory),
    (Region::WesternAustralia, Region::SouthAustralia),
    (Region::SouthAustralia, Region::NorthernTerritory),
    (Region::Queensland, Region::NorthernTerritory),
    (Region::Queensland, Region::SouthAustralia),
    (Region::Queensland, Region::NewSouthWales),
    (Region::NewSouthWales, Region::SouthAustralia),
    (Region::Victoria, Region::SouthAustralia),
    (Region::Victoria, Region::NewSouthWales),
    (Region::Victoria, Region::Tasmania),
];

/// Builds the colouring solver over the given palette.
pub fn australia_solver(palette: &[Colour]) -> Result<CspSolver<Region, Colour>> {
    let variables = REGIONS.to_vec();
    let domains: HashMap<Region, Vec<Colour>> = variables
        .iter()
        .map(|&region| (region, palette.to_vec()))
        .collect();

    let mut solver = CspSolver::new(variables, domains)?;
    for (left, right) in ADJACENCIES {
        solver.add_constraint(Box::new(NotEqualConstraint::new(left, right)))?;
    }
    Ok(solver)
}
