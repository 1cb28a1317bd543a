use crate::csp::{
    assignment::Assignment,
    variable::{DomainValue, Variable},
};

/// Human-readable metadata for one constraint, used in reports and error
/// messages.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule over a subset of variables, checked against a partial assignment.
///
/// The solver dispatches constraints as `Box<dyn Constraint<V, D>>`, so a
/// problem can mix constraint types freely.
pub trait Constraint<V: Variable, D: DomainValue>: std::fmt::Debug {
    /// The variables this constraint's predicate depends on (its scope).
    fn variables(&self) -> &[V];

    /// Metadata for reporting.
    fn descriptor(&self) -> ConstraintDescriptor;

    /// Whether the rule holds under `assignment`.
    ///
    /// An implementation must never report failure because a scoped variable
    /// is still unbound; unbound variables defer judgment. It may fail
    /// early when the values already bound cannot be extended to a
    /// satisfying completion; that early rejection is what lets the solver
    /// prune.
    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool;
}
