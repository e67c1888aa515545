use crate::{
    foundation::core::{Canvas, Rect},
    foundation::error::{FramekitError, FramekitResult},
    foundation::math::approx_eq,
    layout::shape::{
        Anchor, Axis, BarPosition, HEdge, LayoutShape, MainSide, MosaicEntry, StripPosition, VEdge,
    },
};

const RATIO_SUM_TOLERANCE: f64 = 0.1;

/// Largest slot count [`compute_layout`] accepts.
pub const MAX_SLOTS: usize = 1024;

// Strip offset from the top or bottom edge, as a fraction of canvas height.
const STRIP_EDGE_FRACTION: f64 = 0.05;
const WEBCAM_ASPECT: f64 = 16.0 / 9.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Canvas and spacing parameters shared by all shapes.
pub struct LayoutConfig {
    /// Canvas the layout fills.
    #[serde(default)]
    pub canvas: Canvas,
    /// Inset from every canvas edge, in pixels.
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Space between neighbouring slots, in pixels.
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Border drawn inside each slot, in pixels.
    #[serde(default)]
    pub border_width: f64,
}

fn default_padding() -> f64 {
    40.0
}

fn default_gap() -> f64 {
    20.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            padding: default_padding(),
            gap: default_gap(),
            border_width: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Reject non-finite or negative spacing and an empty canvas.
    pub fn validate(&self) -> FramekitResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FramekitError::layout("canvas width/height must be > 0"));
        }
        for (name, value) in [
            ("padding", self.padding),
            ("gap", self.gap),
            ("border_width", self.border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FramekitError::layout(format!(
                    "layout {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    fn padded(&self) -> Rect {
        let c = self.canvas.rect();
        Rect::new(
            c.x0 + self.padding,
            c.y0 + self.padding,
            c.x1 - self.padding,
            c.y1 - self.padding,
        )
    }
}

/// Region of the canvas in percent of canvas width/height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PercentRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// One placed layout region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    /// Position in the slot list.
    pub index: usize,
    /// Region in canvas pixels.
    pub rect: Rect,
    /// Stacking order; higher draws on top.
    pub z: i32,
}

impl Slot {
    /// The region inside a border of width `border`.
    ///
    /// Borders wider than half the slot collapse the region to its center line.
    pub fn content_rect(&self, border: f64) -> Rect {
        inset_rect(self.rect, border)
    }

    /// The region in percent of `canvas`.
    pub fn percent(&self, canvas: Canvas) -> PercentRect {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        PercentRect {
            x: self.rect.x0 / w * 100.0,
            y: self.rect.y0 / h * 100.0,
            width: self.rect.width() / w * 100.0,
            height: self.rect.height() / h * 100.0,
        }
    }
}

// Shrink `r` by `amount` on every side without inverting it.
pub(crate) fn inset_rect(r: Rect, amount: f64) -> Rect {
    let bx = amount.min(r.width() * 0.5).max(0.0);
    let by = amount.min(r.height() * 0.5).max(0.0);
    Rect::new(r.x0 + bx, r.y0 + by, r.x1 - bx, r.y1 - by)
}

/// Compute slot regions for `shape`.
///
/// `slot_count` defaults to the shape's capacity. Mosaics reuse their panels
/// cyclically; every other shape never produces more than its capacity.
/// Counts above [`MAX_SLOTS`] are rejected.
pub fn compute_layout(
    shape: &LayoutShape,
    slot_count: Option<usize>,
    config: &LayoutConfig,
) -> FramekitResult<Vec<Slot>> {
    config.validate()?;

    let capacity = shape.capacity();
    let wanted = slot_count.unwrap_or(capacity);
    if wanted > MAX_SLOTS {
        return Err(FramekitError::layout(format!(
            "slot count {wanted} exceeds the maximum of {MAX_SLOTS}"
        )));
    }
    let count = if wanted > capacity && !shape.wraps() {
        tracing::warn!(
            requested = wanted,
            capacity,
            "layout has fewer slots than requested; extra slots dropped"
        );
        capacity
    } else {
        wanted
    };

    let rects = match shape {
        LayoutShape::Grid { columns, rows } => grid(*columns, *rows, count, config)?,
        LayoutShape::Split { axis, ratios } => split(*axis, ratios, count, config)?,
        LayoutShape::Asymmetric {
            main,
            main_ratio,
            secondary,
        } => asymmetric(*main, *main_ratio, *secondary, count, config)?,
        LayoutShape::Overlay {
            anchor,
            size_pct,
            aspect,
            margin,
        } => overlay(*anchor, *size_pct, *aspect, *margin, count, config)?,
        LayoutShape::Strip {
            position,
            height_pct,
        } => strip(*position, *height_pct, count, config)?,
        LayoutShape::Hud {
            webcam,
            webcam_pct,
            chat_pct,
            margin,
        } => hud(*webcam, *webcam_pct, *chat_pct, *margin, count, config)?,
        LayoutShape::Timeline {
            position,
            bar_height,
            margin,
        } => timeline(*position, *bar_height, *margin, count, config)?,
        LayoutShape::Mosaic { preset } => mosaic(preset.entries(), count, config)?,
        LayoutShape::CustomMosaic { entries } => mosaic(entries, count, config)?,
    };

    Ok(rects
        .into_iter()
        .enumerate()
        .map(|(index, (rect, z))| Slot { index, rect, z })
        .collect())
}

fn grid(
    columns: u32,
    rows: u32,
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if columns == 0 || rows == 0 {
        return Err(FramekitError::layout("grid columns and rows must be > 0"));
    }
    let area = config.padded();
    let (c, r) = (f64::from(columns), f64::from(rows));
    let cell_w = (area.width() - (c - 1.0) * config.gap) / c;
    let cell_h = (area.height() - (r - 1.0) * config.gap) / r;
    ensure_positive(cell_w, cell_h, "grid cell")?;

    let cols = columns as usize;
    Ok((0..count)
        .map(|i| {
            let (row, col) = (i / cols, i % cols);
            let x = area.x0 + col as f64 * (cell_w + config.gap);
            let y = area.y0 + row as f64 * (cell_h + config.gap);
            (Rect::new(x, y, x + cell_w, y + cell_h), 0)
        })
        .collect())
}

// Band lengths along one axis: `len * r / 100 - gap * (n - 1) / n`.
fn band_lengths(len: f64, ratios: &[f64], gap: f64) -> FramekitResult<Vec<f64>> {
    if ratios.is_empty() {
        return Err(FramekitError::layout("split needs at least one ratio"));
    }
    if ratios.iter().any(|r| !r.is_finite() || *r <= 0.0) {
        return Err(FramekitError::layout("split ratios must be finite and > 0"));
    }
    let sum: f64 = ratios.iter().sum();
    if !approx_eq(sum, 100.0, RATIO_SUM_TOLERANCE) {
        return Err(FramekitError::layout(format!(
            "split ratios must sum to 100 (got {sum})"
        )));
    }
    let n = ratios.len() as f64;
    let lens: Vec<f64> = ratios
        .iter()
        .map(|r| len * r / 100.0 - gap * (n - 1.0) / n)
        .collect();
    if lens.iter().any(|l| *l <= 0.0) {
        return Err(FramekitError::layout(
            "split region size is not positive; reduce gap or padding",
        ));
    }
    Ok(lens)
}

// Consecutive rects along `axis` inside `area`, separated by `gap`.
fn stack(area: Rect, axis: Axis, lens: &[f64], gap: f64) -> Vec<Rect> {
    let mut cursor = match axis {
        Axis::Horizontal => area.x0,
        Axis::Vertical => area.y0,
    };
    lens.iter()
        .map(|len| {
            let rect = match axis {
                Axis::Horizontal => Rect::new(cursor, area.y0, cursor + len, area.y1),
                Axis::Vertical => Rect::new(area.x0, cursor, area.x1, cursor + len),
            };
            cursor += len + gap;
            rect
        })
        .collect()
}

fn axis_len(area: Rect, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => area.width(),
        Axis::Vertical => area.height(),
    }
}

fn split(
    axis: Axis,
    ratios: &[f64],
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    let area = config.padded();
    ensure_positive(area.width(), area.height(), "padded canvas")?;
    let lens = band_lengths(axis_len(area, axis), ratios, config.gap)?;
    Ok(stack(area, axis, &lens, config.gap)
        .into_iter()
        .take(count)
        .map(|r| (r, 0))
        .collect())
}

fn asymmetric(
    main: MainSide,
    main_ratio: f64,
    secondary: u32,
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if !main_ratio.is_finite() || main_ratio <= 0.0 || main_ratio >= 100.0 {
        return Err(FramekitError::layout(
            "asymmetric main_ratio must be within (0, 100)",
        ));
    }
    let area = config.padded();
    ensure_positive(area.width(), area.height(), "padded canvas")?;

    let (axis, main_first) = match main {
        MainSide::Left => (Axis::Horizontal, true),
        MainSide::Right => (Axis::Horizontal, false),
        MainSide::Top => (Axis::Vertical, true),
        MainSide::Bottom => (Axis::Vertical, false),
    };
    let ratios = if main_first {
        [main_ratio, 100.0 - main_ratio]
    } else {
        [100.0 - main_ratio, main_ratio]
    };
    let lens = band_lengths(axis_len(area, axis), &ratios, config.gap)?;
    let bands = stack(area, axis, &lens, config.gap);
    let (main_band, side_band) = if main_first {
        (bands[0], bands[1])
    } else {
        (bands[1], bands[0])
    };

    let mut out = vec![(main_band, 0)];
    if secondary > 0 {
        let cross = match axis {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        };
        let n = f64::from(secondary);
        let each = (axis_len(side_band, cross) - (n - 1.0) * config.gap) / n;
        ensure_positive(each, each, "asymmetric secondary slot")?;
        let lens = vec![each; secondary as usize];
        out.extend(stack(side_band, cross, &lens, config.gap).into_iter().map(|r| (r, 0)));
    }
    out.truncate(count);
    Ok(out)
}

fn overlay(
    anchor: Anchor,
    size_pct: f64,
    aspect: f64,
    margin: f64,
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if !size_pct.is_finite() || size_pct <= 0.0 || size_pct > 100.0 {
        return Err(FramekitError::layout("overlay size_pct must be within (0, 100]"));
    }
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(FramekitError::layout("overlay aspect must be finite and > 0"));
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(FramekitError::layout("overlay margin must be finite and >= 0"));
    }

    let canvas = config.canvas.rect();
    let w = canvas.width() * size_pct / 100.0;
    let h = w / aspect;
    if w + 2.0 * margin > canvas.width() || h + 2.0 * margin > canvas.height() {
        return Err(FramekitError::layout("overlay inset does not fit the canvas"));
    }

    let mut out = vec![(canvas, 0), (anchored(canvas, anchor, w, h, margin), 100)];
    out.truncate(count);
    Ok(out)
}

// A `w`x`h` rect placed at `anchor`, `margin` away from the edges of `canvas`.
fn anchored(canvas: Rect, anchor: Anchor, w: f64, h: f64, margin: f64) -> Rect {
    let left = canvas.x0 + margin;
    let h_center = canvas.x0 + (canvas.width() - w) * 0.5;
    let right = canvas.x1 - margin - w;
    let top = canvas.y0 + margin;
    let v_center = canvas.y0 + (canvas.height() - h) * 0.5;
    let bottom = canvas.y1 - margin - h;
    let (x, y) = match anchor {
        Anchor::TopLeft => (left, top),
        Anchor::TopCenter => (h_center, top),
        Anchor::TopRight => (right, top),
        Anchor::CenterLeft => (left, v_center),
        Anchor::CenterRight => (right, v_center),
        Anchor::BottomLeft => (left, bottom),
        Anchor::BottomCenter => (h_center, bottom),
        Anchor::BottomRight => (right, bottom),
    };
    Rect::new(x, y, x + w, y + h)
}

fn strip(
    position: StripPosition,
    height_pct: f64,
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if !height_pct.is_finite() || height_pct <= 0.0 || height_pct > 90.0 {
        return Err(FramekitError::layout("strip height_pct must be within (0, 90]"));
    }
    let canvas = config.canvas.rect();
    let h = canvas.height() * height_pct / 100.0;
    let edge = canvas.height() * STRIP_EDGE_FRACTION;
    let y = match position {
        StripPosition::Top => edge,
        StripPosition::Center => (canvas.height() - h) * 0.5,
        StripPosition::Bottom => canvas.height() - edge - h,
    };

    let mut out = vec![(canvas, 0), (Rect::new(canvas.x0, y, canvas.x1, y + h), 10)];
    out.truncate(count);
    Ok(out)
}

fn hud(
    webcam: Anchor,
    webcam_pct: f64,
    chat_pct: f64,
    margin: f64,
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if !webcam_pct.is_finite() || webcam_pct <= 0.0 || webcam_pct > 100.0 {
        return Err(FramekitError::layout("hud webcam_pct must be within (0, 100]"));
    }
    if !chat_pct.is_finite() || !(0.0..100.0).contains(&chat_pct) {
        return Err(FramekitError::layout("hud chat_pct must be within [0, 100)"));
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(FramekitError::layout("hud margin must be finite and >= 0"));
    }

    let canvas = config.canvas.rect();
    let cam_w = canvas.width() * webcam_pct / 100.0;
    let cam_h = cam_w / WEBCAM_ASPECT;
    if cam_w + 2.0 * margin > canvas.width() || cam_h + 2.0 * margin > canvas.height() {
        return Err(FramekitError::layout("hud webcam does not fit the canvas"));
    }

    let mut out = vec![
        (canvas, 0),
        (anchored(canvas, webcam, cam_w, cam_h, margin), 10),
    ];
    if chat_pct > 0.0 {
        let chat_w = canvas.width() * chat_pct / 100.0;
        let x0 = canvas.x1 - margin - chat_w;
        let chat = Rect::new(x0, canvas.y0 + margin, canvas.x1 - margin, canvas.y1 - margin);
        ensure_positive(chat.width(), chat.height(), "hud chat panel")?;
        out.push((chat, 5));
    }
    out.truncate(count);
    Ok(out)
}

fn timeline(
    position: BarPosition,
    bar_height: f64,
    margin: f64,
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if !bar_height.is_finite() || bar_height <= 0.0 {
        return Err(FramekitError::layout("timeline bar_height must be finite and > 0"));
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(FramekitError::layout("timeline margin must be finite and >= 0"));
    }

    let canvas = config.canvas.rect();
    let reserved = bar_height + 2.0 * margin;
    ensure_positive(
        canvas.width() - 2.0 * margin,
        canvas.height() - reserved,
        "timeline content",
    )?;

    let (content, bar_y) = match position {
        BarPosition::Bottom => (
            Rect::new(canvas.x0, canvas.y0, canvas.x1, canvas.y1 - reserved),
            canvas.y1 - margin - bar_height,
        ),
        BarPosition::Top => (
            Rect::new(canvas.x0, canvas.y0 + reserved, canvas.x1, canvas.y1),
            canvas.y0 + margin,
        ),
    };
    let bar = Rect::new(
        canvas.x0 + margin,
        bar_y,
        canvas.x1 - margin,
        bar_y + bar_height,
    );

    let mut out = vec![(content, 0), (bar, 10)];
    out.truncate(count);
    Ok(out)
}

fn mosaic(
    entries: &[MosaicEntry],
    count: usize,
    config: &LayoutConfig,
) -> FramekitResult<Vec<(Rect, i32)>> {
    if entries.is_empty() {
        return Err(FramekitError::layout("mosaic needs at least one entry"));
    }
    let canvas = config.canvas.rect();
    let (cw, ch) = (canvas.width(), canvas.height());

    let mut placed = Vec::with_capacity(entries.len());
    for e in entries {
        let offsets = [
            e.width,
            e.height,
            match e.vertical {
                VEdge::Top(v) | VEdge::Bottom(v) => v,
            },
            match e.horizontal {
                HEdge::Left(v) | HEdge::Right(v) => v,
            },
        ];
        if offsets.iter().any(|v| !v.is_finite()) {
            return Err(FramekitError::layout("mosaic entries must be finite"));
        }
        let w = cw * e.width / 100.0;
        let h = ch * e.height / 100.0;
        ensure_positive(w, h, "mosaic panel")?;
        let x = match e.horizontal {
            HEdge::Left(p) => cw * p / 100.0,
            HEdge::Right(p) => cw - cw * p / 100.0 - w,
        };
        let y = match e.vertical {
            VEdge::Top(p) => ch * p / 100.0,
            VEdge::Bottom(p) => ch - ch * p / 100.0 - h,
        };
        placed.push((Rect::new(x, y, x + w, y + h), e.z));
    }

    Ok((0..count).map(|i| placed[i % placed.len()]).collect())
}

fn ensure_positive(w: f64, h: f64, what: &str) -> FramekitResult<()> {
    if !(w > 0.0 && h > 0.0) {
        return Err(FramekitError::layout(format!(
            "{what} size is not positive ({w:.2}x{h:.2}); reduce gap or padding"
        )));
    }
    Ok(())
}

/// Pair `items` with `slots` in order.
///
/// Items past the last slot are dropped (warned); slots without an item get `None`.
pub fn assign<'s, 'i, T>(slots: &'s [Slot], items: &'i [T]) -> Vec<(&'s Slot, Option<&'i T>)> {
    if items.len() > slots.len() {
        tracing::warn!(
            items = items.len(),
            slots = slots.len(),
            "more items than layout slots; extra items dropped"
        );
    }
    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| (slot, items.get(i)))
        .collect()
}

/// A shape resolved against a config; computed once, reused every frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedLayout {
    shape: LayoutShape,
    config: LayoutConfig,
    slots: Vec<Slot>,
}

impl ResolvedLayout {
    /// Validate and compute the layout.
    pub fn new(
        shape: LayoutShape,
        slot_count: Option<usize>,
        config: LayoutConfig,
    ) -> FramekitResult<Self> {
        let slots = compute_layout(&shape, slot_count, &config)?;
        Ok(Self {
            shape,
            config,
            slots,
        })
    }

    /// The resolved shape.
    pub fn shape(&self) -> &LayoutShape {
        &self.shape
    }

    /// The config used.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computed slots in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// See [`assign`].
    pub fn assign<'i, T>(&self, items: &'i [T]) -> Vec<(&Slot, Option<&'i T>)> {
        assign(&self.slots, items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
