use std::{collections::BTreeSet, path::Path};

use crate::{
    animation::{
        entrance::EntranceKind,
        typing::{CursorStyle, TypingSequencer, TypingSpeed},
    },
    composition::content::{Content, default_language, default_true},
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{FramekitError, FramekitResult},
    layout::{shape::ShapeRef, solver::LayoutConfig},
    style::{
        color::Color,
        variant::{CodeVariant, TitleVariant},
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete scene timeline.
///
/// Compositions are plain data: build them with [`crate::CompositionBuilder`]
/// or load them from JSON, then evaluate frames through [`crate::Timeline`].
pub struct Composition {
    /// Timeline frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Output canvas dimensions.
    #[serde(default)]
    pub canvas: Canvas,
    /// Total composition duration in frames.
    pub duration: FrameIndex,
    /// Scenes in authoring order; later scenes draw above earlier ones at equal z.
    pub scenes: Vec<Scene>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One self-contained visual segment of the timeline.
pub struct Scene {
    /// Identifier, unique within the composition.
    pub id: String,
    /// First global frame on which the scene is visible.
    pub start_frame: u64,
    /// Number of frames the scene stays visible.
    pub duration_in_frames: u64,
    /// Stacking order across scenes.
    #[serde(default)]
    pub z: i32,
    /// Scene type and parameters.
    pub kind: SceneKind,
}

impl Scene {
    /// The scene's visibility window.
    pub fn window(&self) -> FramekitResult<FrameRange> {
        FrameRange::from_start_duration(FrameIndex(self.start_frame), self.duration_in_frames)
            .map_err(|e| FramekitError::validation(format!("scene '{}': {e}", self.id)))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Scene types.
pub enum SceneKind {
    /// Full-canvas title card.
    Title(TitleScene),
    /// Code panel typed in character by character.
    TypingCode(TypingCodeScene),
    /// Static code panel with an entrance animation.
    CodeBlock(CodeBlockScene),
    /// Multi-panel layout of content items.
    Layout(LayoutScene),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Title card parameters.
pub struct TitleScene {
    /// Headline.
    pub title: String,
    /// Optional line under the headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Look of the card.
    #[serde(default)]
    pub variant: TitleVariant,
    /// Entrance animation.
    #[serde(default)]
    pub animation: EntranceKind,
}

fn default_start_delay_frames() -> u64 {
    10
}

fn default_blink_period_frames() -> u64 {
    30
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Typing code panel parameters.
pub struct TypingCodeScene {
    /// Source text.
    pub code: String,
    /// Highlighting language.
    #[serde(default = "default_language")]
    pub language: String,
    /// Window title shown in the panel's title bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Panel style.
    #[serde(default)]
    pub variant: CodeVariant,
    /// Cursor glyph.
    #[serde(default)]
    pub cursor_style: CursorStyle,
    /// Reveal rate.
    #[serde(default)]
    pub typing_speed: TypingSpeed,
    /// Draw a line-number gutter.
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
    /// Frames before the first character appears.
    #[serde(default = "default_start_delay_frames")]
    pub start_delay_frames: u64,
    /// Full cursor blink cycle in frames.
    #[serde(default = "default_blink_period_frames")]
    pub blink_period_frames: u64,
}

impl TypingCodeScene {
    /// Sequencer configured from this scene.
    pub fn sequencer(&self) -> TypingSequencer {
        TypingSequencer {
            speed: self.typing_speed,
            start_delay: self.start_delay_frames,
            blink_period: self.blink_period_frames,
            cursor: self.cursor_style,
        }
    }
}

fn default_code_animation() -> EntranceKind {
    EntranceKind::SlideUp
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static code panel parameters.
pub struct CodeBlockScene {
    /// Source text.
    pub code: String,
    /// Highlighting language.
    #[serde(default = "default_language")]
    pub language: String,
    /// Window title shown in the panel's title bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Panel style.
    #[serde(default)]
    pub variant: CodeVariant,
    /// Draw a line-number gutter.
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
    /// Entrance animation.
    #[serde(default = "default_code_animation")]
    pub animation: EntranceKind,
}

fn default_padding() -> f64 {
    LayoutConfig::default().padding
}

fn default_gap() -> f64 {
    LayoutConfig::default().gap
}

fn default_border_color() -> Color {
    Color::WHITE.with_alpha(0.2)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Multi-panel layout parameters.
pub struct LayoutScene {
    /// Layout name or explicit shape.
    #[serde(default)]
    pub shape: ShapeRef,
    /// Inset from the canvas edges in pixels.
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Space between slots in pixels.
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Border drawn inside every slot; zero draws none.
    #[serde(default)]
    pub border_width: f64,
    /// Slot border color.
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    /// Fill behind every slot; transparent draws none.
    #[serde(default)]
    pub cell_background: Color,
    /// Number of slots; defaults to the shape's capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_count: Option<usize>,
    /// Slot contents in slot order.
    #[serde(default)]
    pub items: Vec<Content>,
}

impl LayoutScene {
    /// Layout config for `canvas`.
    pub fn config(&self, canvas: Canvas) -> LayoutConfig {
        LayoutConfig {
            canvas,
            padding: self.padding,
            gap: self.gap,
            border_width: self.border_width,
        }
    }
}

impl Composition {
    /// Parse a composition from JSON text. The result is not validated.
    pub fn from_json(text: &str) -> FramekitResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| FramekitError::serde(format!("parse composition JSON: {e}")))
    }

    /// Read and parse a composition JSON file.
    pub fn from_path(path: &Path) -> FramekitResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            anyhow::Error::new(e).context(format!("read composition '{}'", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> FramekitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate composition invariants and per-scene parameters.
    ///
    /// Layout geometry is checked by [`crate::Timeline::new`], which resolves it.
    pub fn validate(&self) -> FramekitResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(FramekitError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FramekitError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(FramekitError::validation("duration must be > 0 frames"));
        }

        let mut ids = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(FramekitError::validation("scene id must be non-empty"));
            }
            if !ids.insert(scene.id.as_str()) {
                return Err(FramekitError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            let window = scene.window()?;
            if window.end.0 > self.duration.0 {
                return Err(FramekitError::validation(format!(
                    "scene '{}' ends at frame {} past composition duration {}",
                    scene.id, window.end.0, self.duration.0
                )));
            }

            match &scene.kind {
                SceneKind::Title(_) | SceneKind::CodeBlock(_) => {}
                SceneKind::TypingCode(t) => t.sequencer().validate().map_err(|e| {
                    FramekitError::validation(format!("scene '{}': {e}", scene.id))
                })?,
                SceneKind::Layout(l) => {
                    for (slot, item) in l.items.iter().enumerate() {
                        if let Content::Code {
                            typing: Some(seq), ..
                        } = item
                        {
                            seq.validate().map_err(|e| {
                                FramekitError::validation(format!(
                                    "scene '{}' slot {slot}: {e}",
                                    scene.id
                                ))
                            })?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
