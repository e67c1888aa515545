use crate::{
    foundation::error::{FramekitError, FramekitResult},
    style::variant::{NamedVariant, named_variant_serde},
};

/// Named typing speeds in characters per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypingSpeed {
    /// 0.5 chars/frame.
    Slow,
    /// 1.5 chars/frame.
    #[default]
    Normal,
    /// 3 chars/frame.
    Fast,
    /// Everything on the first active frame.
    Instant,
}

impl TypingSpeed {
    /// Characters revealed per frame; `None` for [`TypingSpeed::Instant`].
    pub fn chars_per_frame(self) -> Option<f64> {
        match self {
            Self::Slow => Some(0.5),
            Self::Normal => Some(1.5),
            Self::Fast => Some(3.0),
            Self::Instant => None,
        }
    }
}

impl NamedVariant for TypingSpeed {
    const ALL: &'static [Self] = &[Self::Slow, Self::Normal, Self::Fast, Self::Instant];

    fn name(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::Instant => "instant",
        }
    }
}

named_variant_serde!(TypingSpeed);

/// Cursor glyph drawn after the revealed text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorStyle {
    /// Full character cell.
    Block,
    /// Thin vertical bar.
    #[default]
    Line,
    /// Bar under the next cell.
    Underline,
    /// No cursor at all.
    Hidden,
}

impl NamedVariant for CursorStyle {
    const ALL: &'static [Self] = &[Self::Block, Self::Line, Self::Underline, Self::Hidden];

    fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Line => "line",
            Self::Underline => "underline",
            Self::Hidden => "none",
        }
    }
}

named_variant_serde!(CursorStyle);

/// Derived typing state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingState<'a> {
    /// Number of characters revealed.
    pub chars_revealed: usize,
    /// Total characters in the source text.
    pub total_chars: usize,
    /// Revealed prefix of the source text.
    pub revealed: &'a str,
    /// Whether the cursor is drawn this frame.
    pub cursor_on: bool,
    /// All characters are revealed.
    pub complete: bool,
}

/// Typing-reveal parameters for one piece of text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypingSequencer {
    /// Reveal rate.
    #[serde(default)]
    pub speed: TypingSpeed,
    /// Frames to wait before the first character.
    #[serde(default = "default_start_delay")]
    pub start_delay: u64,
    /// Full on/off cursor cycle in frames.
    #[serde(default = "default_blink_period")]
    pub blink_period: u64,
    /// Cursor glyph.
    #[serde(default)]
    pub cursor: CursorStyle,
}

fn default_start_delay() -> u64 {
    10
}

fn default_blink_period() -> u64 {
    30
}

impl Default for TypingSequencer {
    fn default() -> Self {
        Self {
            speed: TypingSpeed::default(),
            start_delay: default_start_delay(),
            blink_period: default_blink_period(),
            cursor: CursorStyle::default(),
        }
    }
}

impl TypingSequencer {
    /// Reject blink periods that cannot be halved.
    pub fn validate(&self) -> FramekitResult<()> {
        if self.blink_period < 2 {
            return Err(FramekitError::validation(
                "cursor blink period must be >= 2 frames",
            ));
        }
        Ok(())
    }

    /// Characters visible at `relative_frame` for a text of `total` characters.
    pub fn chars_at(&self, relative_frame: i64, total: usize) -> usize {
        let delay = i64::try_from(self.start_delay).unwrap_or(i64::MAX);
        let elapsed = relative_frame.saturating_sub(delay);
        if elapsed < 0 {
            return 0;
        }
        match self.speed.chars_per_frame() {
            None => total,
            Some(cps) => {
                let n = (elapsed as f64 * cps).floor();
                if n >= total as f64 { total } else { n as usize }
            }
        }
    }

    /// Typing state of `text` at `relative_frame` (frames since scene start).
    pub fn state<'a>(&self, relative_frame: i64, text: &'a str) -> TypingState<'a> {
        let total = text.chars().count();
        let chars = self.chars_at(relative_frame, total);
        let revealed = match text.char_indices().nth(chars) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        };
        let complete = chars >= total;
        let half = (self.blink_period / 2).max(1) as i64;
        let phase_on = relative_frame.div_euclid(half).rem_euclid(2) == 0;
        TypingState {
            chars_revealed: chars,
            total_chars: total,
            revealed,
            cursor_on: !complete && self.cursor != CursorStyle::Hidden && phase_on,
            complete,
        }
    }

    /// First relative frame at which all `total` characters are visible.
    pub fn frames_to_complete(&self, total: usize) -> u64 {
        match self.speed.chars_per_frame() {
            None => self.start_delay,
            Some(cps) => self.start_delay + (total as f64 / cps).ceil() as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typing.rs"]
mod tests;
