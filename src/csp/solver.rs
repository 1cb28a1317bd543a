use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::{
    csp::{
        assignment::Assignment,
        constraint::Constraint,
        heuristics::{SelectFirst, VariableSelection},
        variable::{DomainValue, Variable},
    },
    error::{ConfigError, Result},
};

/// Identifies one registered constraint within a solver, in registration
/// order.
pub type ConstraintId = usize;

/// Counters gathered over one solve call.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SolveStats {
    /// Search-tree nodes entered (one per recursive call).
    pub nodes_visited: u64,
    /// Candidate values abandoned, either rejected by a constraint or
    /// exhausted by a failing subtree.
    pub backtracks: u64,
    /// Per-constraint check counters, keyed by [`ConstraintId`].
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// Check counters for a single constraint.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PerConstraintStats {
    /// Times the predicate was evaluated.
    pub checks: u64,
    /// Times the predicate rejected a branch.
    pub rejections: u64,
    /// Total time spent inside the predicate.
    pub time_spent_micros: u64,
}

/// A recursive backtracking solver over variables, domains, and
/// constraints.
///
/// The solver owns the problem definition: a variable order, a domain
/// (ordered candidate list) per variable, and a set of boxed
/// [`Constraint`]s indexed by the variables they scope. Wiring mistakes
/// (a variable without a domain, a constraint or seed referencing an
/// unknown variable) are reported as configuration errors before any
/// search work begins. "No solution" is never an error: it comes back as
/// `None`.
///
/// Search is deterministic: with the default [`SelectFirst`] strategy the
/// result depends only on the caller's variable order and domain order.
pub struct CspSolver<V: Variable, D: DomainValue> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<D>>,
    constraints: Vec<Box<dyn Constraint<V, D>>>,
    by_variable: HashMap<V, Vec<ConstraintId>>,
    selection: Box<dyn VariableSelection<V, D>>,
}

impl<V: Variable, D: DomainValue> CspSolver<V, D> {
    /// Creates a solver for the given variables and their domains.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingDomain`] if any variable has no entry in
    /// `domains`.
    pub fn new(variables: Vec<V>, domains: HashMap<V, Vec<D>>) -> Result<Self> {
        for variable in &variables {
            if !domains.contains_key(variable) {
                return Err(ConfigError::MissingDomain {
                    variable: format!("{:?}", variable),
                }
                .into());
            }
        }
        Ok(Self {
            variables,
            domains,
            constraints: Vec::new(),
            by_variable: HashMap::new(),
            selection: Box::new(SelectFirst),
        })
    }

    /// Replaces the variable-selection strategy.
    pub fn with_selection(mut self, selection: Box<dyn VariableSelection<V, D>>) -> Self {
        self.selection = selection;
        self
    }

    /// Registers a constraint and indexes it under each variable in its
    /// scope.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownVariable`] if the scope mentions a variable
    /// the solver was not constructed with.
    pub fn add_constraint(
        &mut self,
        constraint: Box<dyn Constraint<V, D>>,
    ) -> Result<ConstraintId> {
        for variable in constraint.variables() {
            if !self.variables.contains(variable) {
                return Err(ConfigError::UnknownVariable {
                    constraint: constraint.descriptor().name,
                    variable: format!("{:?}", variable),
                }
                .into());
            }
        }
        let id = self.constraints.len();
        for variable in constraint.variables() {
            self.by_variable
                .entry(variable.clone())
                .or_default()
                .push(id);
        }
        self.constraints.push(constraint);
        Ok(id)
    }

    /// The registered constraints, in registration order.
    pub fn constraints(&self) -> &[Box<dyn Constraint<V, D>>] {
        &self.constraints
    }

    /// Searches for a complete satisfying assignment, starting from the
    /// empty assignment.
    ///
    /// Returns `(None, stats)` when every branch is exhausted, a normal
    /// outcome callers must branch on.
    ///
    /// The search recurses one level per variable, so call depth equals the
    /// variable count. Problems with enough variables to threaten the stack
    /// would need an explicit work-stack rewrite.
    pub fn solve(&self) -> (Option<Assignment<V, D>>, SolveStats) {
        let mut stats = SolveStats::default();
        let solution = self.backtrack(Assignment::new(), &mut stats);
        debug!(
            nodes_visited = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "backtracking finished"
        );
        (solution, stats)
    }

    /// Searches for a complete satisfying assignment extending `initial`.
    ///
    /// The seed is checked against its constraints before any branching, so
    /// a contradictory anchor yields `Ok((None, stats))` rather than
    /// leaking into a "solution".
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownSeedVariable`] if the seed binds a variable
    /// the solver was not constructed with.
    pub fn solve_with(
        &self,
        initial: Assignment<V, D>,
    ) -> Result<(Option<Assignment<V, D>>, SolveStats)> {
        for (variable, _) in initial.iter() {
            if !self.variables.contains(variable) {
                return Err(ConfigError::UnknownSeedVariable {
                    variable: format!("{:?}", variable),
                }
                .into());
            }
        }

        let mut stats = SolveStats::default();
        for (variable, _) in initial.iter() {
            if !self.check_constraints_on(variable, &initial, &mut stats) {
                debug!("initial assignment is inconsistent");
                return Ok((None, stats));
            }
        }

        let solution = self.backtrack(initial, &mut stats);
        debug!(
            nodes_visited = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "backtracking finished"
        );
        Ok((solution, stats))
    }

    fn backtrack(
        &self,
        assignment: Assignment<V, D>,
        stats: &mut SolveStats,
    ) -> Option<Assignment<V, D>> {
        stats.nodes_visited += 1;

        // Selection returns None only when every variable is bound, and
        // constraints held at every binding step on the way here.
        let Some(variable) =
            self.selection
                .select_variable(&self.variables, &self.domains, &assignment)
        else {
            return Some(assignment);
        };

        let domain = self.domains.get(&variable).unwrap();
        for value in domain {
            let branch = assignment.bind(variable.clone(), value.clone());
            // Only constraints scoping the branched variable can have
            // changed their verdict.
            if !self.check_constraints_on(&variable, &branch, stats) {
                stats.backtracks += 1;
                continue;
            }
            if let Some(solution) = self.backtrack(branch, stats) {
                return Some(solution);
            }
            stats.backtracks += 1;
        }

        None
    }

    fn check_constraints_on(
        &self,
        variable: &V,
        assignment: &Assignment<V, D>,
        stats: &mut SolveStats,
    ) -> bool {
        let Some(constraint_ids) = self.by_variable.get(variable) else {
            return true;
        };
        for &id in constraint_ids {
            let started = Instant::now();
            let holds = self.constraints[id].satisfied(assignment);
            let per = stats.constraint_stats.entry(id).or_default();
            per.checks += 1;
            per.time_spent_micros += started.elapsed().as_micros() as u64;
            if !holds {
                per.rejections += 1;
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        csp::constraints::not_equal::NotEqualConstraint, csp::heuristics::MinimumRemainingValues,
        error::ConfigError,
    };

    // --- Test Setup ---

    fn domains(entries: &[(&'static str, &[i64])]) -> HashMap<&'static str, Vec<i64>> {
        entries
            .iter()
            .map(|(var, values)| (*var, values.to_vec()))
            .collect()
    }

    fn not_equal(
        left: &'static str,
        right: &'static str,
    ) -> Box<dyn Constraint<&'static str, i64>> {
        Box::new(NotEqualConstraint::new(left, right))
    }

    // --- Tests ---

    #[test]
    fn missing_domain_is_a_config_error() {
        let result = CspSolver::<&str, i64>::new(vec!["a", "b"], domains(&[("a", &[1])]));

        let err = result.err().expect("construction must fail");
        assert!(matches!(
            err.config_error(),
            ConfigError::MissingDomain { variable } if variable == "\"b\""
        ));
    }

    #[test]
    fn constraint_on_unknown_variable_is_a_config_error() {
        let mut solver =
            CspSolver::new(vec!["a"], domains(&[("a", &[1])])).expect("valid construction");

        let err = solver.add_constraint(not_equal("a", "z")).err().unwrap();
        assert!(matches!(
            err.config_error(),
            ConfigError::UnknownVariable { variable, .. } if variable == "\"z\""
        ));
    }

    #[test]
    fn seed_binding_unknown_variable_is_a_config_error() {
        let solver =
            CspSolver::<&str, i64>::new(vec!["a"], domains(&[("a", &[1])])).unwrap();

        let err = solver
            .solve_with(Assignment::new().bind("z", 1))
            .err()
            .unwrap();
        assert!(matches!(
            err.config_error(),
            ConfigError::UnknownSeedVariable { variable } if variable == "\"z\""
        ));
    }

    #[test]
    fn contradictory_seed_is_no_solution_not_an_error() {
        let mut solver =
            CspSolver::new(vec!["a", "b"], domains(&[("a", &[1, 2]), ("b", &[1, 2])])).unwrap();
        solver.add_constraint(not_equal("a", "b")).unwrap();

        let seed = Assignment::new().bind("a", 1).bind("b", 1);
        let (solution, _stats) = solver.solve_with(seed).expect("config is valid");
        assert_eq!(solution, None);
    }

    #[test]
    fn solver_deduces_the_forced_value() {
        // ?a in {1, 2}, ?b in {1}, a != b: the solver must land on a = 2.
        let mut solver =
            CspSolver::new(vec!["a", "b"], domains(&[("a", &[1, 2]), ("b", &[1])])).unwrap();
        solver.add_constraint(not_equal("a", "b")).unwrap();

        let (solution, stats) = solver.solve();
        let solution = solution.expect("a = 2, b = 1 satisfies the problem");

        assert_eq!(solution.get(&"a"), Some(&2));
        assert_eq!(solution.get(&"b"), Some(&1));
        assert!(stats.backtracks >= 1);
        assert!(stats.nodes_visited >= 2);
    }

    #[test]
    fn first_solution_follows_caller_order() {
        let solver =
            CspSolver::<&str, i64>::new(vec!["a", "b"], domains(&[("a", &[3, 1]), ("b", &[2, 4])]))
                .unwrap();

        let (solution, _stats) = solver.solve();
        let solution = solution.unwrap();
        // No constraints: the first candidate of each domain wins.
        assert_eq!(solution.get(&"a"), Some(&3));
        assert_eq!(solution.get(&"b"), Some(&2));
    }

    #[test]
    fn identical_inputs_give_identical_solutions() {
        let build = || {
            let mut solver = CspSolver::new(
                vec!["a", "b", "c"],
                domains(&[("a", &[1, 2, 3]), ("b", &[1, 2, 3]), ("c", &[1, 2, 3])]),
            )
            .unwrap();
            solver.add_constraint(not_equal("a", "b")).unwrap();
            solver.add_constraint(not_equal("b", "c")).unwrap();
            solver.add_constraint(not_equal("a", "c")).unwrap();
            solver
        };

        let (first, _) = build().solve();
        let (second, _) = build().solve();
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn seeded_solve_keeps_the_anchor() {
        let mut solver =
            CspSolver::new(vec!["a", "b"], domains(&[("a", &[1, 2]), ("b", &[1, 2])])).unwrap();
        solver.add_constraint(not_equal("a", "b")).unwrap();

        let (solution, _stats) = solver
            .solve_with(Assignment::new().bind("a", 2))
            .unwrap();
        let solution = solution.unwrap();
        assert_eq!(solution.get(&"a"), Some(&2));
        assert_eq!(solution.get(&"b"), Some(&1));
    }

    #[test]
    fn exhausted_domains_return_none() {
        let mut solver =
            CspSolver::new(vec!["a", "b"], domains(&[("a", &[1]), ("b", &[1])])).unwrap();
        solver.add_constraint(not_equal("a", "b")).unwrap();

        let (solution, stats) = solver.solve();
        assert_eq!(solution, None);
        assert!(stats.backtracks >= 1);
    }

    #[test]
    fn no_variables_solves_to_the_empty_assignment() {
        let solver = CspSolver::<&str, i64>::new(Vec::new(), HashMap::new()).unwrap();

        let (solution, stats) = solver.solve();
        assert_eq!(solution, Some(Assignment::new()));
        assert_eq!(stats.nodes_visited, 1);
    }

    #[test]
    fn alternate_selection_still_satisfies_the_problem() {
        let mut solver = CspSolver::new(
            vec!["a", "b", "c"],
            domains(&[("a", &[1, 2, 3]), ("b", &[1]), ("c", &[1, 2])]),
        )
        .unwrap()
        .with_selection(Box::new(MinimumRemainingValues));
        solver.add_constraint(not_equal("a", "b")).unwrap();
        solver.add_constraint(not_equal("b", "c")).unwrap();

        let (solution, _stats) = solver.solve();
        let solution = solution.unwrap();
        assert_ne!(solution.get(&"a"), solution.get(&"b"));
        assert_ne!(solution.get(&"b"), solution.get(&"c"));
        assert_eq!(solution.len(), 3);
    }

    #[test]
    fn per_constraint_stats_count_checks_and_rejections() {
        let mut solver =
            CspSolver::new(vec!["a", "b"], domains(&[("a", &[1]), ("b", &[1, 2])])).unwrap();
        let id = solver.add_constraint(not_equal("a", "b")).unwrap();

        let (solution, stats) = solver.solve();
        assert!(solution.is_some());

        let per = stats.constraint_stats.get(&id).expect("constraint was checked");
        assert!(per.checks >= 2);
        assert_eq!(per.rejections, 1);
    }
}
