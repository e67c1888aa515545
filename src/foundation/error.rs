/// Convenience result type used across framekit.
pub type FramekitResult<T> = Result<T, FramekitError>;

/// Top-level error taxonomy.
///
/// Everything here is a configuration problem detected while building a
/// composition, layout or curve. Per-frame evaluation of a validated timeline
/// only fails for out-of-range frames.
#[derive(thiserror::Error, Debug)]
pub enum FramekitError {
    /// Invalid user-provided composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed interpolation breakpoints or spring parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Layout geometry that cannot be realized (negative cells, bad ratios).
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramekitError {
    /// Build a [`FramekitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramekitError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FramekitError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FramekitError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FramekitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FramekitError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
