//! framekit is the timing and layout core of a declarative video-template engine.
//!
//! Scenes (title cards, typing code panels, multi-panel layouts) are pure
//! functions of a frame number. A renderer asks a [`Timeline`] for frame `N` and
//! receives a [`FrameDescription`]: z-ordered [`VisualNode`]s carrying a
//! rectangle, opacity, transform and paint. Rasterization, text shaping and
//! encoding happen elsewhere.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`Composition`] with [`CompositionBuilder`] or load it from JSON.
//! 2. **Validate**: [`Timeline::new`] checks every scene and resolves layout geometry once.
//! 3. **Evaluate**: [`Timeline::eval_frame`] / [`Timeline::eval_frames`] describe frames.
//!
//! The building blocks are usable on their own: [`interpolate`], [`spring_progress`],
//! [`compute_layout`], [`TypingSequencer`] and the named variant tables.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: evaluation is a pure function of composition and frame.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod eval;
mod foundation;
mod layout;
mod style;

pub use animation::ease::Ease;
pub use animation::entrance::{EntranceKind, EntranceState, FADE_OUT_FRAMES, fade_out};
pub use animation::interpolate::{Extrapolate, InterpolateOptions, Interpolator, interpolate};
pub use animation::spring::{SpringConfig, SpringPreset, settle_frames, spring_progress};
pub use animation::typing::{CursorStyle, TypingSequencer, TypingSpeed, TypingState};
pub use composition::content::{Content, FrameCtx, Paint, Renderable, TextRole, Visual};
pub use composition::dsl::CompositionBuilder;
pub use composition::model::{
    CodeBlockScene, Composition, LayoutScene, Scene, SceneKind, TitleScene, TypingCodeScene,
};
pub use composition::window::{is_active, relative_frame};
pub use eval::batch::{BatchOptions, BatchStats};
pub use eval::evaluator::{FrameDescription, Timeline, VisualNode};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Transform2D, Vec2,
};
pub use foundation::error::{FramekitError, FramekitResult};
pub use layout::shape::{
    Anchor, Axis, BarPosition, CAPTION_BAR_PCT, DEFAULT_CONTENT_RATIO, DEFAULT_MAIN_RATIO, HEdge,
    LayoutShape, MainSide, MosaicEntry, MosaicPreset, ShapeRef, StripPosition, VEdge,
};
pub use layout::solver::{
    LayoutConfig, MAX_SLOTS, PercentRect, ResolvedLayout, Slot, assign, compute_layout,
};
pub use style::color::Color;
pub use style::variant::{
    CodeStyle, CodeVariant, NamedVariant, StyleTable, TitleStyle, TitleVariant,
};
