use crate::{
    animation::typing::{CursorStyle, TypingSequencer},
    foundation::core::{Fps, Rect},
    layout::solver::inset_rect,
    style::{color::Color, variant::CodeVariant},
};

const CURSOR_COLOR: Color = Color::rgb(0x00, 0xD9, 0xFF);
const CODE_TITLE_BAR_PX: f64 = 44.0;
const LABEL_STRIP_PX: f64 = 56.0;

/// Frame-local inputs available to content while describing itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Frames since the owning scene started.
    pub relative: i64,
    /// Owning scene duration in frames.
    pub duration: u64,
}

/// Semantic role of a text run, for font selection by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Title card headline.
    Title,
    /// Title card subtitle.
    Subtitle,
    /// Free text content.
    Body,
    /// Short caption over a region.
    Label,
    /// Window title of a code panel.
    CodeTitle,
}

/// What to draw inside a visual's rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Solid rounded rectangle.
    Fill {
        /// Fill color.
        color: Color,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Inner stroke of the rectangle.
    Border {
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Text centered in the rectangle.
    Text {
        /// Text to shape; already sliced and case-mapped.
        text: String,
        /// Font role.
        role: TextRole,
        /// Font size in pixels.
        size_px: f64,
        /// Font weight.
        weight: u16,
        /// Fill color.
        color: Color,
    },
    /// Monospaced, highlighted source code laid out from the top-left.
    Code {
        /// Visible source text.
        text: String,
        /// Highlighting language.
        language: String,
        /// Draw a line-number gutter.
        show_line_numbers: bool,
        /// Cursor drawn after the last character, when visible this frame.
        cursor: Option<CursorStyle>,
        /// Cursor color.
        cursor_color: Color,
    },
}

/// A positioned paint, before scene-level opacity and transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Visual {
    /// Region in canvas pixels.
    pub rect: Rect,
    /// What to draw.
    pub paint: Paint,
}

/// Anything that can describe itself as visuals inside a region.
pub trait Renderable {
    /// Visuals for one frame, in back-to-front order.
    fn describe(&self, ctx: &FrameCtx, region: Rect) -> Vec<Visual>;
}

fn default_text_size() -> f64 {
    48.0
}

fn default_text_color() -> Color {
    Color::WHITE
}

pub(crate) fn default_language() -> String {
    "javascript".to_owned()
}

pub(crate) fn default_true() -> bool {
    true
}

/// Content placed into a layout slot.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Nothing; the slot keeps only its cell background and border.
    #[default]
    Empty,
    /// Flat color filling the slot.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Centered text.
    Text {
        /// Text to show.
        text: String,
        /// Font size in pixels.
        #[serde(default = "default_text_size")]
        size_px: f64,
        /// Text color.
        #[serde(default = "default_text_color")]
        color: Color,
    },
    /// Caption strip along the bottom of the slot.
    Label {
        /// Caption text.
        text: String,
    },
    /// Code panel, optionally typed in.
    Code {
        /// Source text.
        code: String,
        /// Highlighting language.
        #[serde(default = "default_language")]
        language: String,
        /// Panel style.
        #[serde(default)]
        variant: CodeVariant,
        /// Typing reveal; `None` shows the full code.
        #[serde(default)]
        typing: Option<TypingSequencer>,
        /// Draw a line-number gutter.
        #[serde(default = "default_true")]
        show_line_numbers: bool,
    },
}

impl Renderable for Content {
    fn describe(&self, ctx: &FrameCtx, region: Rect) -> Vec<Visual> {
        match self {
            Self::Empty => Vec::new(),
            Self::Solid { color } => vec![Visual {
                rect: region,
                paint: Paint::Fill {
                    color: *color,
                    corner_radius: 0.0,
                },
            }],
            Self::Text {
                text,
                size_px,
                color,
            } => vec![Visual {
                rect: region,
                paint: Paint::Text {
                    text: text.clone(),
                    role: TextRole::Body,
                    size_px: *size_px,
                    weight: 600,
                    color: *color,
                },
            }],
            Self::Label { text } => {
                let h = LABEL_STRIP_PX.min(region.height());
                let strip = Rect::new(region.x0, region.y1 - h, region.x1, region.y1);
                vec![
                    Visual {
                        rect: strip,
                        paint: Paint::Fill {
                            color: Color::rgba(0, 0, 0, 153),
                            corner_radius: 0.0,
                        },
                    },
                    Visual {
                        rect: strip,
                        paint: Paint::Text {
                            text: text.clone(),
                            role: TextRole::Label,
                            size_px: 28.0,
                            weight: 600,
                            color: Color::WHITE,
                        },
                    },
                ]
            }
            Self::Code {
                code,
                language,
                variant,
                typing,
                show_line_numbers,
            } => CodePanel {
                code,
                language,
                title: None,
                variant: *variant,
                typing: typing.as_ref(),
                show_line_numbers: *show_line_numbers,
            }
            .describe(ctx, region),
        }
    }
}

/// Styled code window shared by code scenes and code slot content.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CodePanel<'a> {
    pub(crate) code: &'a str,
    pub(crate) language: &'a str,
    pub(crate) title: Option<&'a str>,
    pub(crate) variant: CodeVariant,
    pub(crate) typing: Option<&'a TypingSequencer>,
    pub(crate) show_line_numbers: bool,
}

impl Renderable for CodePanel<'_> {
    fn describe(&self, ctx: &FrameCtx, region: Rect) -> Vec<Visual> {
        let style = self.variant.style();
        let mut out = vec![Visual {
            rect: region,
            paint: Paint::Fill {
                color: style.background,
                corner_radius: style.corner_radius,
            },
        }];
        if style.border_width > 0.0 {
            out.push(Visual {
                rect: region,
                paint: Paint::Border {
                    color: style.border_color,
                    width: style.border_width,
                    corner_radius: style.corner_radius,
                },
            });
        }

        let mut body = region;
        if let Some(title) = self.title {
            let bar_h = CODE_TITLE_BAR_PX.min(region.height());
            let bar = Rect::new(region.x0, region.y0, region.x1, region.y0 + bar_h);
            out.push(Visual {
                rect: bar,
                paint: Paint::Fill {
                    color: Color::rgba(0, 0, 0, 77),
                    corner_radius: style.corner_radius,
                },
            });
            out.push(Visual {
                rect: bar,
                paint: Paint::Text {
                    text: title.to_owned(),
                    role: TextRole::CodeTitle,
                    size_px: 16.0,
                    weight: 500,
                    color: Color::WHITE.with_alpha(0.7),
                },
            });
            body = Rect::new(region.x0, bar.y1, region.x1, region.y1);
        }

        let (text, cursor) = match self.typing {
            Some(seq) => {
                let state = seq.state(ctx.relative, self.code);
                (state.revealed, state.cursor_on.then_some(seq.cursor))
            }
            None => (self.code, None),
        };
        out.push(Visual {
            rect: inset_rect(body, style.padding),
            paint: Paint::Code {
                text: text.to_owned(),
                language: self.language.to_owned(),
                show_line_numbers: self.show_line_numbers,
                cursor,
                cursor_color: CURSOR_COLOR,
            },
        });
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/content.rs"]
mod tests;
