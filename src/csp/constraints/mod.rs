//! A small standard library of reusable constraints. Problem-specific
//! constraints implement [`crate::csp::constraint::Constraint`] directly.

pub mod all_different;
pub mod not_equal;
