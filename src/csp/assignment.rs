use im::HashMap;
use serde::Serialize;

use crate::csp::variable::{DomainValue, Variable};

/// A mapping from variables to chosen values: partial during search,
/// complete once every variable is bound.
///
/// Backed by a persistent map, so [`Assignment::bind`] produces a new
/// assignment that shares structure with its parent instead of copying it.
/// Each recursive branch of the solver holds its own snapshot; extending
/// one branch can never be observed by a sibling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment<V: Variable, D: DomainValue> {
    bindings: HashMap<V, D>,
}

impl<V: Variable, D: DomainValue> Assignment<V, D> {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Returns a new assignment extending this one with `variable = value`.
    ///
    /// The receiver is left untouched. Binding a variable that is already
    /// bound replaces its value in the new assignment only.
    pub fn bind(&self, variable: V, value: D) -> Self {
        Self {
            bindings: self.bindings.update(variable, value),
        }
    }

    /// The value bound to `variable`, if any.
    pub fn get(&self, variable: &V) -> Option<&D> {
        self.bindings.get(variable)
    }

    /// Whether `variable` is bound.
    pub fn contains(&self, variable: &V) -> bool {
        self.bindings.contains_key(variable)
    }

    /// The number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over `(variable, value)` bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &D)> {
        self.bindings.iter()
    }
}

impl<V: Variable, D: DomainValue> Default for Assignment<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variable, D: DomainValue> FromIterator<(V, D)> for Assignment<V, D> {
    fn from_iter<I: IntoIterator<Item = (V, D)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
