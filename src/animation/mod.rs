//! Time-to-value curves: interpolation, easing, springs, typing reveal and
//! title-card entrances.

pub(crate) mod ease;
pub(crate) mod entrance;
pub(crate) mod interpolate;
pub(crate) mod spring;
pub(crate) mod typing;
