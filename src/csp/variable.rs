/// The base trait for anything that can name a CSP variable.
///
/// A variable identifier must be cloneable, debuggable, equatable, and
/// hashable so it can key domains and assignments. This is a marker trait,
/// so any type that satisfies these bounds implements `Variable`.
pub trait Variable: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> Variable for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// The base trait for any value a variable's domain can hold.
///
/// The bounds mirror [`Variable`]: values are compared for equality when
/// constraints are checked and hashed when constraints deduplicate them.
pub trait DomainValue: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> DomainValue for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
