//! Layout shapes and the slot solver.

pub(crate) mod shape;
pub(crate) mod solver;
