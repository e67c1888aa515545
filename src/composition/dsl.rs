use crate::{
    composition::{
        content::{Content, default_language},
        model::{
            CodeBlockScene, Composition, LayoutScene, Scene, SceneKind, TitleScene,
            TypingCodeScene,
        },
    },
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{FramekitError, FramekitResult},
    layout::{shape::ShapeRef, solver::LayoutConfig},
    style::color::Color,
};

/// Incremental composition builder.
///
/// Scenes added with [`CompositionBuilder::then`] start where the last base
/// layer (z = 0) scene ends. The composition lasts until the latest scene end
/// unless [`CompositionBuilder::duration`] overrides it.
#[derive(Clone, Debug, Default)]
pub struct CompositionBuilder {
    fps: Fps,
    canvas: Canvas,
    duration: Option<u64>,
    scenes: Vec<Scene>,
}

impl CompositionBuilder {
    /// Start an empty composition.
    pub fn new(fps: Fps, canvas: Canvas) -> Self {
        Self {
            fps,
            canvas,
            duration: None,
            scenes: Vec::new(),
        }
    }

    /// Fix the total duration in frames.
    pub fn duration(mut self, frames: u64) -> Self {
        self.duration = Some(frames);
        self
    }

    /// Whole frames in `seconds`, rounded down.
    pub fn seconds_to_frames(&self, seconds: f64) -> u64 {
        self.fps.secs_to_frames_floor(seconds)
    }

    /// Seconds spanned by `frames`.
    pub fn frames_to_seconds(&self, frames: u64) -> f64 {
        self.fps.frames_to_secs(frames as f64)
    }

    /// Start frame for the next sequential scene.
    pub fn next_start_frame(&self) -> u64 {
        self.scenes
            .iter()
            .filter(|s| s.z == 0)
            .map(|s| s.start_frame.saturating_add(s.duration_in_frames))
            .max()
            .unwrap_or(0)
    }

    /// Latest scene end.
    pub fn total_duration_frames(&self) -> u64 {
        self.scenes
            .iter()
            .map(|s| s.start_frame.saturating_add(s.duration_in_frames))
            .max()
            .unwrap_or(0)
    }

    /// Append a base-layer scene right after the previous one.
    pub fn then(self, id: impl Into<String>, frames: u64, kind: impl Into<SceneKind>) -> Self {
        let start = self.next_start_frame();
        self.at(id, start, frames, 0, kind)
    }

    /// [`CompositionBuilder::then`] with a duration in seconds.
    pub fn then_secs(
        self,
        id: impl Into<String>,
        seconds: f64,
        kind: impl Into<SceneKind>,
    ) -> Self {
        let frames = self.seconds_to_frames(seconds);
        self.then(id, frames, kind)
    }

    /// Place a scene at an explicit start frame and z.
    pub fn at(
        mut self,
        id: impl Into<String>,
        start_frame: u64,
        frames: u64,
        z: i32,
        kind: impl Into<SceneKind>,
    ) -> Self {
        self.scenes.push(Scene {
            id: id.into(),
            start_frame,
            duration_in_frames: frames,
            z,
            kind: kind.into(),
        });
        self
    }

    /// [`CompositionBuilder::at`] with times in seconds.
    pub fn at_secs(
        self,
        id: impl Into<String>,
        start_s: f64,
        duration_s: f64,
        z: i32,
        kind: impl Into<SceneKind>,
    ) -> Self {
        let start = self.seconds_to_frames(start_s);
        let frames = self.seconds_to_frames(duration_s);
        self.at(id, start, frames, z, kind)
    }

    /// Validate and produce the composition.
    pub fn build(self) -> FramekitResult<Composition> {
        let duration = self.duration.unwrap_or_else(|| self.total_duration_frames());
        if duration == 0 {
            return Err(FramekitError::validation(
                "composition has no scenes and no explicit duration",
            ));
        }
        let comp = Composition {
            fps: self.fps,
            canvas: self.canvas,
            duration: FrameIndex(duration),
            scenes: self.scenes,
        };
        comp.validate()?;
        Ok(comp)
    }
}

impl TitleScene {
    /// Title card with default variant and fade entrance.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            variant: Default::default(),
            animation: Default::default(),
        }
    }

    /// Set the subtitle.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl TypingCodeScene {
    /// Typing panel with default speed, cursor and editor style.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: default_language(),
            title: None,
            variant: Default::default(),
            cursor_style: Default::default(),
            typing_speed: Default::default(),
            show_line_numbers: true,
            start_delay_frames: 10,
            blink_period_frames: 30,
        }
    }

    /// Set the highlighting language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl CodeBlockScene {
    /// Static code panel sliding up.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: default_language(),
            title: None,
            variant: Default::default(),
            show_line_numbers: true,
            animation: crate::animation::entrance::EntranceKind::SlideUp,
        }
    }
}

impl LayoutScene {
    /// Layout with default spacing and no items.
    pub fn new(shape: impl Into<ShapeRef>) -> Self {
        let cfg = LayoutConfig::default();
        Self {
            shape: shape.into(),
            padding: cfg.padding,
            gap: cfg.gap,
            border_width: cfg.border_width,
            border_color: Color::WHITE.with_alpha(0.2),
            cell_background: Color::TRANSPARENT,
            slot_count: None,
            items: Vec::new(),
        }
    }

    /// Append a slot item.
    pub fn item(mut self, content: Content) -> Self {
        self.items.push(content);
        self
    }
}

impl From<TitleScene> for SceneKind {
    fn from(value: TitleScene) -> Self {
        Self::Title(value)
    }
}

impl From<TypingCodeScene> for SceneKind {
    fn from(value: TypingCodeScene) -> Self {
        Self::TypingCode(value)
    }
}

impl From<CodeBlockScene> for SceneKind {
    fn from(value: CodeBlockScene) -> Self {
        Self::CodeBlock(value)
    }
}

impl From<LayoutScene> for SceneKind {
    fn from(value: LayoutScene) -> Self {
        Self::Layout(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
