use crate::csp::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    variable::{DomainValue, Variable},
};

/// A binary constraint requiring two variables to take different values.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<V: Variable> {
    vars: [V; 2],
}

impl<V: Variable> NotEqualConstraint<V> {
    pub fn new(left: V, right: V) -> Self {
        Self {
            vars: [left, right],
        }
    }
}

impl<V: Variable, D: DomainValue> Constraint<V, D> for NotEqualConstraint<V> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("{:?} != {:?}", self.vars[0], self.vars[1]),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match (assignment.get(&self.vars[0]), assignment.get(&self.vars[1])) {
            (Some(left), Some(right)) => left != right,
            // Either side unbound: defer judgment.
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint() -> NotEqualConstraint<&'static str> {
        NotEqualConstraint::new("a", "b")
    }

    #[test]
    fn defers_while_either_side_is_unbound() {
        let c = constraint();
        let empty: Assignment<&str, i64> = Assignment::new();

        assert!(c.satisfied(&empty));
        assert!(c.satisfied(&empty.bind("a", 1)));
        assert!(c.satisfied(&empty.bind("b", 1)));
    }

    #[test]
    fn rejects_equal_values() {
        let assignment: Assignment<&str, i64> = Assignment::new().bind("a", 1).bind("b", 1);
        assert!(!constraint().satisfied(&assignment));
    }

    #[test]
    fn accepts_different_values() {
        let assignment: Assignment<&str, i64> = Assignment::new().bind("a", 1).bind("b", 2);
        assert!(constraint().satisfied(&assignment));
    }
}
