use crate::{
    animation::{
        interpolate::interpolate_span,
        spring::{SpringConfig, SpringPreset, spring_progress},
    },
    foundation::core::{Fps, Vec2},
    style::variant::{NamedVariant, named_variant_serde},
};

/// Frames of the closing fade applied to every entrance kind.
pub const FADE_OUT_FRAMES: u64 = 20;

const FADE_IN_FRAMES: f64 = 20.0;
const TYPEWRITER_FRAMES: f64 = 60.0;

/// How a scene's content enters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntranceKind {
    /// Linear opacity ramp over the first 20 frames.
    #[default]
    Fade,
    /// Spring fade while scaling up from 0.8.
    FadeZoom,
    /// Spring fade while rising 100 px.
    SlideUp,
    /// Reveal characters over the first 60 frames.
    Typewriter,
    /// Spring fade while a 20 px blur resolves.
    BlurIn,
    /// Spring fade while sliding in from 50 px left.
    FadeSlide,
    /// Spring fade while scaling down from 1.2.
    Zoom,
}

impl NamedVariant for EntranceKind {
    const ALL: &'static [Self] = &[
        Self::Fade,
        Self::FadeZoom,
        Self::SlideUp,
        Self::Typewriter,
        Self::BlurIn,
        Self::FadeSlide,
        Self::Zoom,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::FadeZoom => "fade_zoom",
            Self::SlideUp => "slide_up",
            Self::Typewriter => "typewriter",
            Self::BlurIn => "blur_in",
            Self::FadeSlide => "fade_slide",
            Self::Zoom => "zoom",
        }
    }
}

named_variant_serde!(EntranceKind);

/// Visual state of entering content at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntranceState {
    /// Final opacity in `[0, 1]`, fade-out included.
    pub opacity: f64,
    /// Uniform scale around the content center.
    pub scale: f64,
    /// Offset in pixels.
    pub translate: Vec2,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Characters to show; `None` shows the full text.
    pub visible_chars: Option<usize>,
}

impl Default for EntranceState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate: Vec2::ZERO,
            blur_px: 0.0,
            visible_chars: None,
        }
    }
}

impl EntranceKind {
    /// Spring driving this kind, if any.
    pub fn spring(self) -> Option<SpringConfig> {
        match self {
            Self::Fade | Self::Typewriter => None,
            Self::BlurIn => Some(SpringConfig {
                damping: 150.0,
                mass: 0.5,
                stiffness: 150.0,
                overshoot_clamping: false,
            }),
            Self::FadeZoom | Self::SlideUp | Self::FadeSlide | Self::Zoom => {
                Some(SpringPreset::Smooth.config())
            }
        }
    }

    /// Sample the entrance at `relative` frames into a scene lasting `duration`.
    ///
    /// `text_chars` is the character count of the animated text, used by
    /// [`EntranceKind::Typewriter`].
    pub fn sample(
        self,
        relative: i64,
        duration: u64,
        fps: Fps,
        text_chars: usize,
    ) -> EntranceState {
        let rel = relative as f64;
        let mut state = EntranceState::default();

        match self.spring() {
            None if self == Self::Typewriter => {
                let shown = interpolate_span(
                    rel,
                    (0.0, TYPEWRITER_FRAMES),
                    (0.0, text_chars as f64),
                    true,
                );
                state.visible_chars = Some((shown.floor() as usize).min(text_chars));
            }
            None => {
                state.opacity = interpolate_span(rel, (0.0, FADE_IN_FRAMES), (0.0, 1.0), true);
            }
            Some(cfg) => {
                let p = spring_progress(relative, fps, &cfg);
                state.opacity = p;
                match self {
                    Self::FadeZoom => {
                        state.scale = interpolate_span(p, (0.0, 1.0), (0.8, 1.0), false)
                    }
                    Self::Zoom => {
                        state.scale = interpolate_span(p, (0.0, 1.0), (1.2, 1.0), false)
                    }
                    Self::SlideUp => {
                        state.translate.y = interpolate_span(p, (0.0, 1.0), (100.0, 0.0), false)
                    }
                    Self::FadeSlide => {
                        state.translate.x = interpolate_span(p, (0.0, 1.0), (-50.0, 0.0), false)
                    }
                    Self::BlurIn => {
                        let blur = interpolate_span(p, (0.0, 1.0), (20.0, 0.0), false);
                        state.blur_px = blur.max(0.0);
                    }
                    _ => {}
                }
            }
        }

        state.opacity = (state.opacity * fade_out(rel, duration)).clamp(0.0, 1.0);
        state
    }
}

/// Multiplier for the closing fade: 1 until `duration - 20`, then linear to 0.
pub fn fade_out(relative: f64, duration: u64) -> f64 {
    let end = duration as f64;
    let start = end - FADE_OUT_FRAMES as f64;
    interpolate_span(relative, (start, end), (1.0, 0.0), true)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
