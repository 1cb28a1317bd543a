//! The SEND + MORE = MONEY cryptarithm: eight letter variables over digit
//! domains, distinct digits, and a column-arithmetic predicate.

use std::collections::HashMap;

use crate::{
    csp::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        constraints::all_different::AllDifferentConstraint,
        solver::CspSolver,
    },
    error::Result,
};

pub const LETTERS: [char; 8] = ['S', 'E', 'N', 'D', 'M', 'O', 'R', 'Y'];

/// Checks `SEND + MORE == MONEY` once every letter has a digit; until
/// then, judgment is deferred.
#[derive(Debug, Clone)]
pub struct SendMoreMoneyConstraint {
    letters: Vec<char>,
}

impl SendMoreMoneyConstraint {
    pub fn new() -> Self {
        Self {
            letters: LETTERS.to_vec(),
        }
    }
}

impl Default for SendMoreMoneyConstraint {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint<char, u32> for SendMoreMoneyConstraint {
    fn variables(&self) -> &[char] {
        &self.letters
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "SendMoreMoneyConstraint".to_string(),
            description: "SEND + MORE == MONEY".to_string(),
        }
    }

    fn satisfied(&self, assignment: &Assignment<char, u32>) -> bool {
        let Some(digits) = self
            .letters
            .iter()
            .map(|letter| assignment.get(letter).copied())
            .collect::<Option<Vec<u32>>>()
        else {
            return true;
        };
        let [s, e, n, d, m, o, r, y] = digits[..] else {
            return true;
        };

        let send = s * 1000 + e * 100 + n * 10 + d;
        let more = m * 1000 + o * 100 + r * 10 + e;
        let money = m * 10_000 + o * 1000 + n * 100 + e * 10 + y;
        send + more == money
    }
}

/// Builds the cryptarithm solver. `M` is pinned to 1 so `MONEY` cannot
/// start with a leading zero, which also makes the solution unique.
pub fn send_more_money_solver() -> Result<CspSolver<char, u32>> {
    let letters = LETTERS.to_vec();
    let mut domains: HashMap<char, Vec<u32>> = letters
        .iter()
        .map(|&letter| (letter, (0..=9).collect()))
        .collect();
    domains.insert('M', vec![1]);

    let mut solver = CspSolver::new(letters.clone(), domains)?;
    solver.add_constraint(Box::new(AllDifferentConstraint::new(letters)))?;
    solver.add_constraint(Box::new(SendMoreMoneyConstraint::new()))?;
    Ok(solver)
}
