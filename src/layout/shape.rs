use crate::style::variant::{NamedVariant, named_variant_serde, normalize_name};

/// Direction along which a ratio split lays out its slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Slots side by side (columns).
    #[default]
    Horizontal,
    /// Slots stacked top to bottom (rows).
    Vertical,
}

/// Edge that holds the main region of an asymmetric layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MainSide {
    /// Main on the left, secondaries stacked on the right.
    Left,
    /// Secondaries stacked on the left, main on the right.
    #[default]
    Right,
    /// Main on top, secondaries side by side below.
    Top,
    /// Secondaries side by side on top, main below.
    Bottom,
}

impl NamedVariant for MainSide {
    const ALL: &'static [Self] = &[Self::Left, Self::Right, Self::Top, Self::Bottom];

    fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

named_variant_serde!(MainSide);

/// Canvas position of an overlay inset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Top-left corner.
    TopLeft,
    /// Centered along the top edge.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Centered along the left edge.
    CenterLeft,
    /// Centered along the right edge.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Centered along the bottom edge.
    BottomCenter,
    /// Bottom-right corner.
    #[default]
    BottomRight,
}

impl NamedVariant for Anchor {
    const ALL: &'static [Self] = &[
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopCenter => "top_center",
            Self::TopRight => "top_right",
            Self::CenterLeft => "center_left",
            Self::CenterRight => "center_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomCenter => "bottom_center",
            Self::BottomRight => "bottom_right",
        }
    }
}

named_variant_serde!(Anchor);

/// Built-in mosaic collages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MosaicPreset {
    /// Large centered panel with four corner accents.
    #[default]
    HeroCorners,
    /// Five cascading panels.
    Stacked,
    /// Centered panel with three floating accents.
    Spotlight,
}

impl NamedVariant for MosaicPreset {
    const ALL: &'static [Self] = &[Self::HeroCorners, Self::Stacked, Self::Spotlight];

    fn name(self) -> &'static str {
        match self {
            Self::HeroCorners => "hero_corners",
            Self::Stacked => "stacked",
            Self::Spotlight => "spotlight",
        }
    }
}

named_variant_serde!(MosaicPreset);

/// Vertical position of a focus strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StripPosition {
    /// 5% below the top edge.
    Top,
    /// Vertically centered.
    #[default]
    Center,
    /// 5% above the bottom edge.
    Bottom,
}

impl NamedVariant for StripPosition {
    const ALL: &'static [Self] = &[Self::Top, Self::Center, Self::Bottom];

    fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

named_variant_serde!(StripPosition);

/// Edge holding the progress bar of a timeline layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarPosition {
    /// Bar along the top, content below.
    Top,
    /// Bar along the bottom, content above.
    #[default]
    Bottom,
}

impl NamedVariant for BarPosition {
    const ALL: &'static [Self] = &[Self::Top, Self::Bottom];

    fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

named_variant_serde!(BarPosition);

/// Vertical placement of a mosaic entry, in percent of canvas height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VEdge {
    /// Distance from the top edge.
    Top(f64),
    /// Distance from the bottom edge.
    Bottom(f64),
}

/// Horizontal placement of a mosaic entry, in percent of canvas width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HEdge {
    /// Distance from the left edge.
    Left(f64),
    /// Distance from the right edge.
    Right(f64),
}

/// One mosaic panel; sizes are percent of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MosaicEntry {
    /// Width in percent of canvas width.
    pub width: f64,
    /// Height in percent of canvas height.
    pub height: f64,
    /// Offset from the top or bottom edge.
    pub vertical: VEdge,
    /// Offset from the left or right edge.
    pub horizontal: HEdge,
    /// Stacking order.
    #[serde(default)]
    pub z: i32,
}

impl MosaicEntry {
    const fn new(width: f64, height: f64, vertical: VEdge, horizontal: HEdge, z: i32) -> Self {
        Self {
            width,
            height,
            vertical,
            horizontal,
            z,
        }
    }
}

const HERO_CORNERS: [MosaicEntry; 5] = [
    MosaicEntry::new(50.0, 50.0, VEdge::Top(25.0), HEdge::Left(25.0), 10),
    MosaicEntry::new(25.0, 25.0, VEdge::Top(5.0), HEdge::Left(5.0), 5),
    MosaicEntry::new(25.0, 25.0, VEdge::Top(5.0), HEdge::Right(5.0), 5),
    MosaicEntry::new(25.0, 25.0, VEdge::Bottom(5.0), HEdge::Left(5.0), 5),
    MosaicEntry::new(25.0, 25.0, VEdge::Bottom(5.0), HEdge::Right(5.0), 5),
];

const STACKED: [MosaicEntry; 5] = [
    MosaicEntry::new(60.0, 60.0, VEdge::Top(5.0), HEdge::Left(5.0), 1),
    MosaicEntry::new(60.0, 60.0, VEdge::Top(12.0), HEdge::Left(12.0), 2),
    MosaicEntry::new(60.0, 60.0, VEdge::Top(19.0), HEdge::Left(19.0), 3),
    MosaicEntry::new(60.0, 60.0, VEdge::Top(26.0), HEdge::Left(26.0), 4),
    MosaicEntry::new(60.0, 60.0, VEdge::Top(33.0), HEdge::Left(33.0), 5),
];

const SPOTLIGHT: [MosaicEntry; 4] = [
    MosaicEntry::new(55.0, 55.0, VEdge::Top(22.5), HEdge::Left(22.5), 10),
    MosaicEntry::new(20.0, 20.0, VEdge::Top(10.0), HEdge::Left(60.0), 5),
    MosaicEntry::new(20.0, 20.0, VEdge::Top(70.0), HEdge::Left(15.0), 5),
    MosaicEntry::new(20.0, 20.0, VEdge::Top(60.0), HEdge::Right(10.0), 5),
];

impl MosaicPreset {
    /// The preset's panels; slot `i` uses entry `i % len`.
    pub fn entries(self) -> &'static [MosaicEntry] {
        match self {
            Self::HeroCorners => &HERO_CORNERS,
            Self::Stacked => &STACKED,
            Self::Spotlight => &SPOTLIGHT,
        }
    }
}

/// Default main-region share of an asymmetric layout, in percent.
pub const DEFAULT_MAIN_RATIO: f64 = 66.67;

fn default_main_ratio() -> f64 {
    DEFAULT_MAIN_RATIO
}

fn default_secondary() -> u32 {
    2
}

fn default_inset_size_pct() -> f64 {
    15.0
}

fn default_inset_aspect() -> f64 {
    16.0 / 9.0
}

fn default_inset_margin() -> f64 {
    40.0
}

fn default_strip_height_pct() -> f64 {
    30.0
}

fn default_webcam_anchor() -> Anchor {
    Anchor::TopLeft
}

fn default_webcam_pct() -> f64 {
    15.0
}

fn default_chat_pct() -> f64 {
    25.0
}

fn default_hud_margin() -> f64 {
    20.0
}

fn default_bar_height() -> f64 {
    80.0
}

fn default_bar_margin() -> f64 {
    20.0
}

/// Share of a vertical shorts layout taken by the caption bar, in percent.
pub const CAPTION_BAR_PCT: f64 = 10.0;

/// Default top-panel share of a vertical shorts layout, in percent.
pub const DEFAULT_CONTENT_RATIO: f64 = 70.0;

/// Geometric family and parameters of a layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutShape {
    /// Uniform `columns x rows` grid, filled row-major.
    Grid {
        /// Column count.
        columns: u32,
        /// Row count.
        rows: u32,
    },
    /// Slots along `axis` sized by percentages summing to 100.
    Split {
        /// Layout direction.
        axis: Axis,
        /// Per-slot share in percent.
        ratios: Vec<f64>,
    },
    /// One main region plus evenly stacked secondary slots.
    Asymmetric {
        /// Edge holding the main region.
        main: MainSide,
        /// Main region share in percent.
        #[serde(default = "default_main_ratio")]
        main_ratio: f64,
        /// Number of secondary slots.
        #[serde(default = "default_secondary")]
        secondary: u32,
    },
    /// Full-canvas base with an anchored picture-in-picture inset.
    Overlay {
        /// Inset position.
        #[serde(default)]
        anchor: Anchor,
        /// Inset width in percent of canvas width.
        #[serde(default = "default_inset_size_pct")]
        size_pct: f64,
        /// Inset width / height.
        #[serde(default = "default_inset_aspect")]
        aspect: f64,
        /// Distance from the anchored edges in pixels.
        #[serde(default = "default_inset_margin")]
        margin: f64,
    },
    /// Full-canvas background with a full-width focus band.
    ///
    /// Slot 0 is the background, slot 1 the band.
    Strip {
        /// Band placement.
        #[serde(default)]
        position: StripPosition,
        /// Band height in percent of canvas height.
        #[serde(default = "default_strip_height_pct")]
        height_pct: f64,
    },
    /// Livestream HUD: full-canvas gameplay, a 16:9 webcam and a chat column.
    ///
    /// Slot 0 is gameplay, slot 1 the webcam, slot 2 the chat (when enabled).
    Hud {
        /// Webcam position.
        #[serde(default = "default_webcam_anchor")]
        webcam: Anchor,
        /// Webcam width in percent of canvas width.
        #[serde(default = "default_webcam_pct")]
        webcam_pct: f64,
        /// Chat column width in percent of canvas width; zero hides it.
        #[serde(default = "default_chat_pct")]
        chat_pct: f64,
        /// Distance of the overlays from the canvas edges in pixels.
        #[serde(default = "default_hud_margin")]
        margin: f64,
    },
    /// Main content beside a full-width progress bar.
    ///
    /// Slot 0 is the content, slot 1 the bar.
    Timeline {
        /// Bar edge.
        #[serde(default)]
        position: BarPosition,
        /// Bar height in pixels.
        #[serde(default = "default_bar_height")]
        bar_height: f64,
        /// Bar distance from the canvas edges in pixels.
        #[serde(default = "default_bar_margin")]
        margin: f64,
    },
    /// Built-in collage.
    Mosaic {
        /// Which collage.
        #[serde(default)]
        preset: MosaicPreset,
    },
    /// Caller-defined collage.
    CustomMosaic {
        /// Panels, reused cyclically.
        entries: Vec<MosaicEntry>,
    },
}

impl Default for LayoutShape {
    fn default() -> Self {
        Self::Grid {
            columns: 3,
            rows: 3,
        }
    }
}

impl LayoutShape {
    /// Ratio split with equal shares.
    pub fn even_split(axis: Axis, slots: usize) -> Self {
        let n = slots.max(1);
        Self::Split {
            axis,
            ratios: vec![100.0 / n as f64; n],
        }
    }

    /// Picture-in-picture inset at `anchor` with default size and margin.
    pub fn overlay(anchor: Anchor) -> Self {
        Self::Overlay {
            anchor,
            size_pct: default_inset_size_pct(),
            aspect: default_inset_aspect(),
            margin: default_inset_margin(),
        }
    }

    /// Asymmetric layout with default ratio and two secondary slots.
    pub fn asymmetric(main: MainSide) -> Self {
        Self::Asymmetric {
            main,
            main_ratio: DEFAULT_MAIN_RATIO,
            secondary: default_secondary(),
        }
    }

    /// Focus strip at `position` with the default 30% height.
    pub fn strip(position: StripPosition) -> Self {
        Self::Strip {
            position,
            height_pct: default_strip_height_pct(),
        }
    }

    /// HUD with the webcam at `webcam` and default sizes.
    pub fn hud(webcam: Anchor) -> Self {
        Self::Hud {
            webcam,
            webcam_pct: default_webcam_pct(),
            chat_pct: default_chat_pct(),
            margin: default_hud_margin(),
        }
    }

    /// Timeline layout with the bar at `position` and default sizes.
    pub fn timeline(position: BarPosition) -> Self {
        Self::Timeline {
            position,
            bar_height: default_bar_height(),
            margin: default_bar_margin(),
        }
    }

    /// Vertical shorts layout: top panel, bottom panel and a caption bar.
    ///
    /// `content_ratio` is the top panel share; the caption bar takes
    /// [`CAPTION_BAR_PCT`] and the bottom panel the rest.
    pub fn vertical_shorts(content_ratio: f64) -> Self {
        Self::Split {
            axis: Axis::Vertical,
            ratios: vec![
                content_ratio,
                100.0 - CAPTION_BAR_PCT - content_ratio,
                CAPTION_BAR_PCT,
            ],
        }
    }

    /// Resolve a layout name. Never fails: unknown names give the 3x3 grid.
    ///
    /// Recognized: `CxR` grids (columns first), `split-horizontal`,
    /// `split-vertical`, `three-column`, `three-row`, `over-the-shoulder`,
    /// `stacked-reaction`, `dialogue`, `performance-multicam`,
    /// `main-left|right|top|bottom`, `pip-<anchor>`, `mosaic-<preset>`,
    /// `focus-strip[-top|-center|-bottom]`, `hud[-<anchor>]`,
    /// `timeline[-top|-bottom]` and `vertical-layout[-<ratio>]`.
    pub fn from_name(name: &str) -> Self {
        let key = normalize_name(name);
        if let Some(grid) = parse_grid(&key) {
            return grid;
        }
        match key.as_str() {
            "grid" => return Self::default(),
            "split" | "split_horizontal" | "horizontal" | "50_50" | "left_right" => {
                return Self::even_split(Axis::Horizontal, 2);
            }
            "split_vertical" | "vertical" | "top_bottom" => {
                return Self::even_split(Axis::Vertical, 2);
            }
            "three_column" | "three_columns" => return Self::even_split(Axis::Horizontal, 3),
            "three_row" | "three_rows" => return Self::even_split(Axis::Vertical, 3),
            "over_the_shoulder" => {
                return Self::Split {
                    axis: Axis::Horizontal,
                    ratios: vec![35.0, 65.0],
                };
            }
            "stacked_reaction" => {
                return Self::Split {
                    axis: Axis::Vertical,
                    ratios: vec![65.0, 35.0],
                };
            }
            "dialogue" | "dialogue_frame" => return Self::even_split(Axis::Horizontal, 2),
            "performance_multicam" | "performance_multi_cam" | "multicam" | "multi_cam" => {
                return Self::Grid {
                    columns: 2,
                    rows: 2,
                };
            }
            "asymmetric" => return Self::asymmetric(MainSide::default()),
            "pip" | "picture_in_picture" => return Self::overlay(Anchor::default()),
            "mosaic" => {
                return Self::Mosaic {
                    preset: MosaicPreset::default(),
                };
            }
            "focus_strip" => return Self::strip(StripPosition::default()),
            "hud" | "hud_style" => return Self::hud(default_webcam_anchor()),
            "timeline" => return Self::timeline(BarPosition::default()),
            "vertical_layout" | "shorts" | "top_bottom_caption" => {
                return Self::vertical_shorts(DEFAULT_CONTENT_RATIO);
            }
            _ => {}
        }
        if let Some(side) = key.strip_prefix("main_") {
            return Self::asymmetric(MainSide::from_name(side));
        }
        if let Some(anchor) = key.strip_prefix("pip_") {
            return Self::overlay(Anchor::from_name(anchor));
        }
        if let Some(preset) = key.strip_prefix("mosaic_") {
            return Self::Mosaic {
                preset: MosaicPreset::from_name(preset),
            };
        }
        if let Some(position) = key.strip_prefix("focus_strip_") {
            return Self::strip(StripPosition::from_name(position));
        }
        if let Some(anchor) = key.strip_prefix("hud_") {
            return Self::hud(Anchor::from_name(anchor));
        }
        if let Some(position) = key.strip_prefix("timeline_") {
            return Self::timeline(BarPosition::from_name(position));
        }
        if let Some(ratio) = key.strip_prefix("vertical_layout_") {
            let ratio = ratio
                .parse::<f64>()
                .ok()
                .filter(|r| *r > 0.0 && *r < 100.0 - CAPTION_BAR_PCT)
                .unwrap_or(DEFAULT_CONTENT_RATIO);
            return Self::vertical_shorts(ratio);
        }

        tracing::debug!(name, "unknown layout name, using 3x3 grid");
        Self::default()
    }

    /// Number of distinct slots the shape provides.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Grid { columns, rows } => (*columns as usize).saturating_mul(*rows as usize),
            Self::Split { ratios, .. } => ratios.len(),
            Self::Asymmetric { secondary, .. } => 1 + *secondary as usize,
            Self::Overlay { .. } | Self::Strip { .. } | Self::Timeline { .. } => 2,
            Self::Hud { chat_pct, .. } => {
                if *chat_pct > 0.0 {
                    3
                } else {
                    2
                }
            }
            Self::Mosaic { preset } => preset.entries().len(),
            Self::CustomMosaic { entries } => entries.len(),
        }
    }

    /// Mosaics reuse their panels for slots past capacity.
    pub fn wraps(&self) -> bool {
        matches!(self, Self::Mosaic { .. } | Self::CustomMosaic { .. })
    }
}

fn parse_grid(key: &str) -> Option<LayoutShape> {
    let (c, r) = key.split_once('x')?;
    let columns = c.parse::<u32>().ok()?;
    let rows = r.parse::<u32>().ok()?;
    Some(LayoutShape::Grid { columns, rows })
}

/// A layout given either by name or as an explicit shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ShapeRef {
    /// Resolved with [`LayoutShape::from_name`].
    Named(String),
    /// Used as is.
    Explicit(LayoutShape),
}

impl Default for ShapeRef {
    fn default() -> Self {
        Self::Explicit(LayoutShape::default())
    }
}

impl ShapeRef {
    /// The concrete shape.
    pub fn resolve(&self) -> LayoutShape {
        match self {
            Self::Named(name) => LayoutShape::from_name(name),
            Self::Explicit(shape) => shape.clone(),
        }
    }
}

impl From<&str> for ShapeRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<LayoutShape> for ShapeRef {
    fn from(shape: LayoutShape) -> Self {
        Self::Explicit(shape)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/shape.rs"]
mod tests;
