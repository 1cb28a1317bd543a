//! Heuristics for selecting which variable the solver branches on next.

use std::collections::HashMap;

use crate::csp::{
    assignment::Assignment,
    variable::{DomainValue, Variable},
};

/// A strategy for choosing the next unbound variable to branch on.
///
/// A good strategy can shrink the search tree dramatically, but it must not
/// introduce nondeterminism: given identical inputs, `select_variable` must
/// always make the same choice.
pub trait VariableSelection<V: Variable, D: DomainValue> {
    /// Selects the next variable to bind.
    ///
    /// `variables` is the caller-supplied variable order, `domains` the
    /// per-variable candidate lists, and `assignment` the bindings made so
    /// far. Returns `None` only when every variable is bound; the solver
    /// treats `None` as assignment-complete.
    fn select_variable(
        &self,
        variables: &[V],
        domains: &HashMap<V, Vec<D>>,
        assignment: &Assignment<V, D>,
    ) -> Option<V>;
}

/// Selects the first unbound variable in caller order.
///
/// The default strategy. With it, the solver's result depends only on the
/// caller's variable order and domain order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFirst;

impl<V: Variable, D: DomainValue> VariableSelection<V, D> for SelectFirst {
    fn select_variable(
        &self,
        variables: &[V],
        _domains: &HashMap<V, Vec<D>>,
        assignment: &Assignment<V, D>,
    ) -> Option<V> {
        variables
            .iter()
            .find(|var| !assignment.contains(var))
            .cloned()
    }
}

/// Fail-first: selects the unbound variable with the fewest candidate
/// values.
///
/// Tackling the most constrained variable first prunes hopeless branches
/// sooner. Ties resolve to the earliest variable in caller order, so the
/// choice stays deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValues;

impl<V: Variable, D: DomainValue> VariableSelection<V, D> for MinimumRemainingValues {
    fn select_variable(
        &self,
        variables: &[V],
        domains: &HashMap<V, Vec<D>>,
        assignment: &Assignment<V, D>,
    ) -> Option<V> {
        variables
            .iter()
            .filter(|var| !assignment.contains(var))
            // min_by_key keeps the first of equally small domains, which is
            // the earliest variable in caller order.
            .min_by_key(|var| domains.get(*var).map_or(0, Vec::len))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn domains(sizes: &[(&'static str, usize)]) -> HashMap<&'static str, Vec<i64>> {
        sizes
            .iter()
            .map(|(var, size)| (*var, (0..*size as i64).collect()))
            .collect()
    }

    #[test]
    fn select_first_follows_caller_order() {
        let variables = ["a", "b", "c"];
        let domains = domains(&[("a", 2), ("b", 2), ("c", 2)]);
        let assignment: Assignment<&str, i64> = Assignment::new();

        let picked = SelectFirst.select_variable(&variables, &domains, &assignment);
        assert_eq!(picked, Some("a"));
    }

    #[test]
    fn select_first_skips_bound_variables() {
        let variables = ["a", "b", "c"];
        let domains = domains(&[("a", 2), ("b", 2), ("c", 2)]);
        let assignment: Assignment<&str, i64> = Assignment::new().bind("a", 0).bind("b", 0);

        let picked = SelectFirst.select_variable(&variables, &domains, &assignment);
        assert_eq!(picked, Some("c"));
    }

    #[test]
    fn selection_is_none_once_everything_is_bound() {
        let variables = ["a"];
        let domains = domains(&[("a", 1)]);
        let assignment: Assignment<&str, i64> = Assignment::new().bind("a", 0);

        assert_eq!(
            SelectFirst.select_variable(&variables, &domains, &assignment),
            None
        );
        assert_eq!(
            MinimumRemainingValues.select_variable(&variables, &domains, &assignment),
            None
        );
    }

    #[test]
    fn mrv_picks_the_smallest_unbound_domain() {
        let variables = ["a", "b", "c"];
        let domains = domains(&[("a", 4), ("b", 1), ("c", 3)]);
        let assignment: Assignment<&str, i64> = Assignment::new();

        let picked = MinimumRemainingValues.select_variable(&variables, &domains, &assignment);
        assert_eq!(picked, Some("b"));
    }

    #[test]
    fn mrv_breaks_ties_by_caller_order() {
        let variables = ["a", "b", "c"];
        let domains = domains(&[("a", 3), ("b", 2), ("c", 2)]);
        let assignment: Assignment<&str, i64> = Assignment::new();

        let picked = MinimumRemainingValues.select_variable(&variables, &domains, &assignment);
        assert_eq!(picked, Some("b"));
    }
}
