use std::collections::HashSet;

use crate::csp::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    variable::{DomainValue, Variable},
};

/// Requires every variable in its scope to take a pairwise-distinct value.
///
/// This is the workhorse global constraint of problems like sudoku and
/// cryptarithms. Evaluation is incremental: two bound variables sharing a
/// value fail the predicate at once, without waiting for the rest of the
/// scope to be bound.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint<V: Variable> {
    vars: Vec<V>,
}

impl<V: Variable> AllDifferentConstraint<V> {
    /// Creates a new `AllDifferentConstraint` over the given set of variables.
    pub fn new(vars: Vec<V>) -> Self {
        Self { vars }
    }
}

impl<V: Variable, D: DomainValue> Constraint<V, D> for AllDifferentConstraint<V> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("{:?}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        let mut seen = HashSet::with_capacity(self.vars.len());
        for var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }
}
