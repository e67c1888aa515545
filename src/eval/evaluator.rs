use crate::{
    composition::{
        content::{CodePanel, FrameCtx, Paint, Renderable, TextRole, Visual},
        model::{
            CodeBlockScene, Composition, LayoutScene, Scene, SceneKind, TitleScene,
            TypingCodeScene,
        },
    },
    foundation::core::{Affine, FrameIndex, FrameRange, Rect, Transform2D},
    foundation::error::{FramekitError, FramekitResult},
    layout::solver::{ResolvedLayout, inset_rect},
};

const SCENE_PADDING_PX: f64 = 80.0;
const TITLE_MAX_WIDTH_PX: f64 = 1200.0;
const TITLE_LINE_HEIGHT: f64 = 1.1;
const SUBTITLE_SIZE_PX: f64 = 48.0;
const SUBTITLE_LINE_HEIGHT: f64 = 1.3;
const SUBTITLE_MARGIN_PX: f64 = 32.0;
const SUBTITLE_MAX_WIDTH_PX: f64 = 900.0;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameDescription {
    /// Global frame index.
    pub frame: FrameIndex,
    /// Nodes back to front.
    pub nodes: Vec<VisualNode>,
}

/// One drawable element of a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualNode {
    /// Scene that produced the node.
    pub scene_id: String,
    /// Layout slot index, for layout scenes.
    pub slot: Option<usize>,
    /// Effective stacking order.
    pub z: i32,
    /// Region in canvas pixels, before `transform`.
    pub rect: Rect,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Canvas-space transform.
    pub transform: Affine,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// What to draw.
    pub paint: Paint,
}

/// A validated composition ready for per-frame evaluation.
///
/// Construction checks every scene and resolves layout geometry once;
/// [`Timeline::eval_frame`] is then a pure function of the frame index.
#[derive(Clone, Debug)]
pub struct Timeline {
    comp: Composition,
    windows: Vec<FrameRange>,
    layouts: Vec<Option<ResolvedLayout>>,
}

impl Timeline {
    /// Validate `comp` and pre-resolve its layouts.
    #[tracing::instrument(
        skip(comp),
        fields(scenes = comp.scenes.len(), duration = comp.duration.0)
    )]
    pub fn new(comp: Composition) -> FramekitResult<Self> {
        comp.validate()?;

        let mut windows = Vec::with_capacity(comp.scenes.len());
        let mut layouts = Vec::with_capacity(comp.scenes.len());
        for scene in &comp.scenes {
            windows.push(scene.window()?);
            layouts.push(match &scene.kind {
                SceneKind::Layout(l) => Some(resolve_scene_layout(&comp, scene, l)?),
                _ => None,
            });
        }

        tracing::debug!("timeline ready");
        Ok(Self {
            comp,
            windows,
            layouts,
        })
    }

    /// The underlying composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// Total duration in frames.
    pub fn duration(&self) -> FrameIndex {
        self.comp.duration
    }

    /// Resolved layout of scene `idx`, when it is a layout scene.
    pub fn layout(&self, idx: usize) -> Option<&ResolvedLayout> {
        self.layouts.get(idx).and_then(Option::as_ref)
    }

    /// Indices of scenes visible at `frame`, in authoring order.
    pub fn active_scenes(&self, frame: FrameIndex) -> impl Iterator<Item = usize> + '_ {
        self.windows
            .iter()
            .enumerate()
            .filter(move |(_, w)| w.contains(frame))
            .map(|(i, _)| i)
    }

    /// Describe `frame`. Nodes are ordered by z, then scene order, then emission order.
    #[tracing::instrument(skip(self))]
    pub fn eval_frame(&self, frame: FrameIndex) -> FramekitResult<FrameDescription> {
        if frame.0 >= self.comp.duration.0 {
            return Err(FramekitError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, self.comp.duration.0
            )));
        }

        let mut nodes = Vec::new();
        for idx in self.active_scenes(frame) {
            let scene = &self.comp.scenes[idx];
            let ctx = FrameCtx {
                fps: self.comp.fps,
                relative: self.windows[idx].relative(frame),
                duration: scene.duration_in_frames,
            };
            let mut emit = Emitter {
                scene,
                out: &mut nodes,
            };
            match &scene.kind {
                SceneKind::Title(t) => self.eval_title(&ctx, t, &mut emit),
                SceneKind::TypingCode(t) => self.eval_typing_code(&ctx, t, &mut emit),
                SceneKind::CodeBlock(c) => self.eval_code_block(&ctx, c, &mut emit),
                SceneKind::Layout(l) => {
                    if let Some(layout) = self.layout(idx) {
                        eval_layout(&ctx, l, layout, &mut emit);
                    }
                }
            }
        }

        // Stable: equal z keeps scene order, then emission order.
        nodes.sort_by_key(|n| n.z);
        Ok(FrameDescription { frame, nodes })
    }

    fn eval_title(&self, ctx: &FrameCtx, t: &TitleScene, emit: &mut Emitter<'_>) {
        let style = t.variant.style();
        let canvas = self.comp.canvas.rect();
        let entrance = t.animation.sample(
            ctx.relative,
            ctx.duration,
            ctx.fps,
            t.title.chars().count(),
        );

        if !style.background.is_transparent() {
            emit.push(
                Visual {
                    rect: canvas,
                    paint: Paint::Fill {
                        color: style.background,
                        corner_radius: 0.0,
                    },
                },
                Look::default(),
            );
        }

        let mut title = match entrance.visible_chars {
            Some(n) => char_prefix(&t.title, n).to_owned(),
            None => t.title.clone(),
        };
        if style.uppercase {
            title = title.to_uppercase();
        }

        let region = inset_rect(canvas, SCENE_PADDING_PX);
        let center = canvas.center();
        let title_h = style.font_size_px * TITLE_LINE_HEIGHT;
        let sub_h = SUBTITLE_SIZE_PX * SUBTITLE_LINE_HEIGHT;
        let block_h = match t.subtitle {
            Some(_) => title_h + SUBTITLE_MARGIN_PX + sub_h,
            None => title_h,
        };
        let top = center.y - block_h * 0.5;

        let look = Look {
            opacity: entrance.opacity,
            transform: Transform2D {
                translate: entrance.translate,
                scale: entrance.scale,
                anchor: center.to_vec2(),
            }
            .to_affine(),
            blur_px: entrance.blur_px,
        };
        emit.push(
            Visual {
                rect: centered_band(region, TITLE_MAX_WIDTH_PX, top, title_h),
                paint: Paint::Text {
                    text: title,
                    role: TextRole::Title,
                    size_px: style.font_size_px,
                    weight: style.font_weight,
                    color: style.text_color,
                },
            },
            look,
        );
        if let Some(subtitle) = &t.subtitle {
            emit.push(
                Visual {
                    rect: centered_band(
                        region,
                        SUBTITLE_MAX_WIDTH_PX,
                        top + title_h + SUBTITLE_MARGIN_PX,
                        sub_h,
                    ),
                    paint: Paint::Text {
                        text: subtitle.clone(),
                        role: TextRole::Subtitle,
                        size_px: SUBTITLE_SIZE_PX,
                        weight: 500,
                        color: style.accent_color,
                    },
                },
                look,
            );
        }
    }

    fn eval_typing_code(&self, ctx: &FrameCtx, t: &TypingCodeScene, emit: &mut Emitter<'_>) {
        let seq = t.sequencer();
        let panel = CodePanel {
            code: &t.code,
            language: &t.language,
            title: t.title.as_deref(),
            variant: t.variant,
            typing: Some(&seq),
            show_line_numbers: t.show_line_numbers,
        };
        let region = inset_rect(self.comp.canvas.rect(), SCENE_PADDING_PX);
        for v in panel.describe(ctx, region) {
            emit.push(v, Look::default());
        }
    }

    fn eval_code_block(&self, ctx: &FrameCtx, c: &CodeBlockScene, emit: &mut Emitter<'_>) {
        let canvas = self.comp.canvas.rect();
        let entrance =
            c.animation
                .sample(ctx.relative, ctx.duration, ctx.fps, c.code.chars().count());
        let code = match entrance.visible_chars {
            Some(n) => char_prefix(&c.code, n),
            None => c.code.as_str(),
        };
        let panel = CodePanel {
            code,
            language: &c.language,
            title: c.title.as_deref(),
            variant: c.variant,
            typing: None,
            show_line_numbers: c.show_line_numbers,
        };
        let look = Look {
            opacity: entrance.opacity,
            transform: Transform2D {
                translate: entrance.translate,
                scale: entrance.scale,
                anchor: canvas.center().to_vec2(),
            }
            .to_affine(),
            blur_px: entrance.blur_px,
        };
        for v in panel.describe(ctx, inset_rect(canvas, SCENE_PADDING_PX)) {
            emit.push(v, look);
        }
    }
}

fn eval_layout(ctx: &FrameCtx, l: &LayoutScene, layout: &ResolvedLayout, emit: &mut Emitter<'_>) {
    let border = layout.config().border_width;
    for (i, slot) in layout.slots().iter().enumerate() {
        let look = Look::default();
        let z = emit.scene.z.saturating_add(slot.z);
        if !l.cell_background.is_transparent() {
            emit.push_slot(
                Visual {
                    rect: slot.rect,
                    paint: Paint::Fill {
                        color: l.cell_background,
                        corner_radius: 0.0,
                    },
                },
                look,
                i,
                z,
            );
        }
        if let Some(item) = l.items.get(i) {
            for v in item.describe(ctx, slot.content_rect(border)) {
                emit.push_slot(v, look, i, z);
            }
        }
        if border > 0.0 {
            emit.push_slot(
                Visual {
                    rect: slot.rect,
                    paint: Paint::Border {
                        color: l.border_color,
                        width: border,
                        corner_radius: 0.0,
                    },
                },
                look,
                i,
                z,
            );
        }
    }
}

fn resolve_scene_layout(
    comp: &Composition,
    scene: &Scene,
    l: &LayoutScene,
) -> FramekitResult<ResolvedLayout> {
    let layout = ResolvedLayout::new(l.shape.resolve(), l.slot_count, l.config(comp.canvas))
        .map_err(|e| match e {
            FramekitError::Layout(msg) => {
                FramekitError::layout(format!("scene '{}': {msg}", scene.id))
            }
            other => other,
        })?;
    if l.items.len() > layout.slots().len() {
        tracing::warn!(
            scene = %scene.id,
            items = l.items.len(),
            slots = layout.slots().len(),
            "layout scene has more items than slots; extra items are not drawn"
        );
    }
    Ok(layout)
}

#[derive(Clone, Copy, Debug)]
struct Look {
    opacity: f64,
    transform: Affine,
    blur_px: f64,
}

impl Default for Look {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: Affine::IDENTITY,
            blur_px: 0.0,
        }
    }
}

struct Emitter<'a> {
    scene: &'a Scene,
    out: &'a mut Vec<VisualNode>,
}

impl Emitter<'_> {
    fn push(&mut self, v: Visual, look: Look) {
        self.emit(v, look, None, self.scene.z);
    }

    fn push_slot(&mut self, v: Visual, look: Look, slot: usize, z: i32) {
        self.emit(v, look, Some(slot), z);
    }

    fn emit(&mut self, v: Visual, look: Look, slot: Option<usize>, z: i32) {
        self.out.push(VisualNode {
            scene_id: self.scene.id.clone(),
            slot,
            z,
            rect: v.rect,
            opacity: look.opacity,
            transform: look.transform,
            blur_px: look.blur_px,
            paint: v.paint,
        });
    }
}

fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

// Band of at most `max_w` width centered horizontally in `region`.
fn centered_band(region: Rect, max_w: f64, top: f64, height: f64) -> Rect {
    let w = region.width().min(max_w);
    let x0 = region.center().x - w * 0.5;
    Rect::new(x0, top, x0 + w, top + height)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
