//! Frame evaluation, fingerprints and parallel batch evaluation.

pub(crate) mod batch;
pub(crate) mod evaluator;
pub(crate) mod fingerprint;
