//! Scene model, slot content, visibility windows and the builder DSL.

pub(crate) mod content;
pub(crate) mod dsl;
pub(crate) mod model;
pub(crate) mod window;
