//! Colors and named variant tables.

pub(crate) mod color;
pub(crate) mod variant;
