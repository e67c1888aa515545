use crate::foundation::core::{FrameIndex, FrameRange};

/// True when `start <= global < start + duration`.
///
/// A zero-duration window is never active.
pub fn is_active(global: u64, start: u64, duration: u64) -> bool {
    global >= start && global - start < duration
}

/// Frames elapsed since `start`; negative before the window opens.
pub fn relative_frame(global: u64, start: u64) -> i64 {
    let delta = i128::from(global) - i128::from(start);
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}

impl FrameRange {
    /// Frames elapsed since the range start.
    pub fn relative(self, global: FrameIndex) -> i64 {
        relative_frame(global.0, self.start.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/window.rs"]
mod tests;
