//! Frame/time primitives, geometry re-exports, errors and hashing.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
