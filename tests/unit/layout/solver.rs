use super::*;
use crate::layout::shape::MosaicPreset;

fn cfg() -> LayoutConfig {
    LayoutConfig::default()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn assert_rect(r: Rect, x: f64, y: f64, w: f64, h: f64) {
    assert!(
        approx(r.x0, x) && approx(r.y0, y) && approx(r.width(), w) && approx(r.height(), h),
        "got {r:?}, want ({x}, {y}) {w}x{h}"
    );
}

#[test]
fn two_by_two_grid_on_full_hd() {
    let slots = compute_layout(&LayoutShape::from_name("2x2"), None, &cfg()).unwrap();
    assert_eq!(slots.len(), 4);
    assert_rect(slots[0].rect, 40.0, 40.0, 910.0, 490.0);
    assert_rect(slots[1].rect, 970.0, 40.0, 910.0, 490.0);
    assert_rect(slots[2].rect, 40.0, 550.0, 910.0, 490.0);
    assert_rect(slots[3].rect, 970.0, 550.0, 910.0, 490.0);
    assert!(slots.iter().enumerate().all(|(i, s)| s.index == i && s.z == 0));
}

#[test]
fn grid_fills_row_major_and_truncates_to_capacity() {
    let shape = LayoutShape::from_name("3x2");
    let slots = compute_layout(&shape, Some(4), &cfg()).unwrap();
    assert_eq!(slots.len(), 4);
    assert!(approx(slots[3].rect.x0, slots[0].rect.x0));
    assert!(slots[3].rect.y0 > slots[2].rect.y0);

    let slots = compute_layout(&shape, Some(10), &cfg()).unwrap();
    assert_eq!(slots.len(), 6);
}

#[test]
fn grid_cells_stay_inside_padding() {
    let config = cfg();
    let slots = compute_layout(&LayoutShape::from_name("4x2"), None, &config).unwrap();
    for s in &slots {
        assert!(s.rect.x0 >= 40.0 - 1e-9 && s.rect.x1 <= 1880.0 + 1e-9);
        assert!(s.rect.y0 >= 40.0 - 1e-9 && s.rect.y1 <= 1040.0 + 1e-9);
    }
}

#[test]
fn split_sizes_follow_ratios_and_fill_the_axis() {
    let shape = LayoutShape::Split {
        axis: Axis::Horizontal,
        ratios: vec![35.0, 65.0],
    };
    let slots = compute_layout(&shape, None, &cfg()).unwrap();
    assert_eq!(slots.len(), 2);
    // 1840 * 0.35 - 10 and 1840 * 0.65 - 10
    assert_rect(slots[0].rect, 40.0, 40.0, 634.0, 1000.0);
    assert_rect(slots[1].rect, 694.0, 40.0, 1186.0, 1000.0);
    assert!(approx(slots[1].rect.x1, 1880.0));
}

#[test]
fn three_row_split_tiles_vertically() {
    let slots = compute_layout(&LayoutShape::from_name("three-row"), None, &cfg()).unwrap();
    assert_eq!(slots.len(), 3);
    let total: f64 = slots.iter().map(|s| s.rect.height()).sum::<f64>() + 2.0 * 20.0;
    assert!(approx(total, 1000.0));
    assert!(approx(slots[2].rect.y1, 1040.0));
    assert!(slots.iter().all(|s| approx(s.rect.width(), 1840.0)));
}

#[test]
fn bad_ratio_sums_are_rejected() {
    let shape = LayoutShape::Split {
        axis: Axis::Vertical,
        ratios: vec![50.0, 40.0],
    };
    assert!(matches!(
        compute_layout(&shape, None, &cfg()),
        Err(FramekitError::Layout(_))
    ));

    let within_tolerance = LayoutShape::Split {
        axis: Axis::Vertical,
        ratios: vec![33.33, 33.33, 33.33],
    };
    assert!(compute_layout(&within_tolerance, None, &cfg()).is_ok());
}

#[test]
fn asymmetric_main_left_and_stacked_secondaries() {
    let slots = compute_layout(&LayoutShape::from_name("main-left"), None, &cfg()).unwrap();
    assert_eq!(slots.len(), 3);
    let main = slots[0].rect;
    assert!(approx(main.x0, 40.0));
    assert!(approx(main.width(), 1840.0 * 0.6667 - 10.0));
    assert!(approx(main.height(), 1000.0));

    let (a, b) = (slots[1].rect, slots[2].rect);
    assert!(approx(a.x0, main.x1 + 20.0));
    assert!(approx(a.x1, 1880.0));
    assert!(approx(a.height(), 490.0));
    assert!(approx(b.y0, a.y1 + 20.0));
}

#[test]
fn asymmetric_main_right_puts_main_after_the_band() {
    let slots = compute_layout(&LayoutShape::from_name("main-right"), None, &cfg()).unwrap();
    assert!(slots[0].rect.x0 > slots[1].rect.x1);
    assert!(approx(slots[0].rect.x1, 1880.0));
}

#[test]
fn asymmetric_main_bottom_places_secondaries_side_by_side() {
    let slots = compute_layout(&LayoutShape::from_name("main-bottom"), None, &cfg()).unwrap();
    let main = slots[0].rect;
    assert!(approx(main.y1, 1040.0));
    assert!(approx(slots[1].rect.y0, 40.0));
    assert!(approx(slots[1].rect.y0, slots[2].rect.y0));
    assert!(approx(slots[2].rect.x0, slots[1].rect.x1 + 20.0));
}

#[test]
fn overlay_anchors() {
    let slots = compute_layout(&LayoutShape::from_name("pip-bottom-right"), None, &cfg()).unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].rect, Canvas::default().rect());
    assert_eq!(slots[0].z, 0);
    assert_eq!(slots[1].z, 100);
    let w = 1920.0 * 0.15;
    let h = w * 9.0 / 16.0;
    assert_rect(slots[1].rect, 1920.0 - 40.0 - w, 1080.0 - 40.0 - h, w, h);

    let slots = compute_layout(&LayoutShape::from_name("pip-top-center"), None, &cfg()).unwrap();
    assert!(approx(slots[1].rect.center().x, 960.0));
    assert!(approx(slots[1].rect.y0, 40.0));

    let slots = compute_layout(&LayoutShape::from_name("pip-center-left"), None, &cfg()).unwrap();
    assert!(approx(slots[1].rect.x0, 40.0));
    assert!(approx(slots[1].rect.center().y, 540.0));
}

#[test]
fn oversized_overlay_is_rejected() {
    let shape = LayoutShape::Overlay {
        anchor: Anchor::TopLeft,
        size_pct: 100.0,
        aspect: 16.0 / 9.0,
        margin: 40.0,
    };
    assert!(compute_layout(&shape, None, &cfg()).is_err());
}

#[test]
fn mosaic_wraps_cyclically() {
    let shape = LayoutShape::Mosaic {
        preset: MosaicPreset::Spotlight,
    };
    let slots = compute_layout(&shape, Some(6), &cfg()).unwrap();
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[4].rect, slots[0].rect);
    assert_eq!(slots[5].rect, slots[1].rect);
    assert_eq!(slots[4].z, 10);
    assert_eq!(slots[4].index, 4);
}

#[test]
fn hero_corners_geometry() {
    let shape = LayoutShape::from_name("mosaic-hero-corners");
    let slots = compute_layout(&shape, None, &cfg()).unwrap();
    assert_eq!(slots.len(), 5);
    assert_rect(slots[0].rect, 480.0, 270.0, 960.0, 540.0);
    assert_eq!(slots[0].z, 10);
    // bottom-right corner: right 5%, bottom 5%
    assert_rect(slots[4].rect, 1920.0 - 96.0 - 480.0, 1080.0 - 54.0 - 270.0, 480.0, 270.0);
    let p = slots[0].percent(Canvas::default());
    assert!(approx(p.x, 25.0) && approx(p.y, 25.0));
    assert!(approx(p.width, 50.0) && approx(p.height, 50.0));
}

#[test]
fn negative_cells_are_layout_errors() {
    let config = LayoutConfig {
        canvas: Canvas {
            width: 200,
            height: 200,
        },
        padding: 40.0,
        gap: 100.0,
        border_width: 0.0,
    };
    assert!(matches!(
        compute_layout(&LayoutShape::from_name("3x3"), None, &config),
        Err(FramekitError::Layout(_))
    ));
    assert!(compute_layout(&LayoutShape::Grid { columns: 0, rows: 2 }, None, &cfg()).is_err());

    let bad = LayoutConfig {
        gap: f64::NAN,
        ..cfg()
    };
    assert!(compute_layout(&LayoutShape::default(), None, &bad).is_err());
}

#[test]
fn content_rect_insets_by_border() {
    let slot = Slot {
        index: 0,
        rect: Rect::new(0.0, 0.0, 100.0, 50.0),
        z: 0,
    };
    assert_eq!(slot.content_rect(4.0), Rect::new(4.0, 4.0, 96.0, 46.0));
    let collapsed = slot.content_rect(80.0);
    assert!(approx(collapsed.width(), 0.0) && approx(collapsed.height(), 0.0));
}

#[test]
fn assign_drops_extras_and_pads_missing() {
    let layout = ResolvedLayout::new(LayoutShape::from_name("2x1"), None, cfg()).unwrap();
    let pairs = layout.assign(&["a", "b", "c"]);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1].1, Some(&"b"));

    let pairs = layout.assign(&["only"]);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].1, Some(&"only"));
    assert_eq!(pairs[1].1, None);
}

#[test]
fn slot_count_above_maximum_is_rejected() {
    let spotlight = LayoutShape::Mosaic {
        preset: MosaicPreset::Spotlight,
    };
    let err = compute_layout(&spotlight, Some(usize::MAX), &cfg()).unwrap_err();
    assert!(matches!(err, FramekitError::Layout(_)), "{err}");
    assert!(compute_layout(&spotlight, Some(MAX_SLOTS + 1), &cfg()).is_err());

    let slots = compute_layout(&spotlight, Some(MAX_SLOTS), &cfg()).unwrap();
    assert_eq!(slots.len(), MAX_SLOTS);
    assert_eq!(slots[MAX_SLOTS - 1].index, MAX_SLOTS - 1);

    let grid = LayoutShape::Grid {
        columns: 2000,
        rows: 2,
    };
    assert!(compute_layout(&grid, None, &cfg()).is_err());
}

#[test]
fn grid_cells_and_gaps_fill_the_padded_area() {
    let config = cfg();
    let inner_w = 1920.0 - 2.0 * config.padding;
    let inner_h = 1080.0 - 2.0 * config.padding;
    for columns in 1..=6u32 {
        for rows in 1..=6u32 {
            let shape = LayoutShape::Grid { columns, rows };
            let slots = compute_layout(&shape, None, &config).unwrap();
            assert_eq!(slots.len(), (columns * rows) as usize);

            let c = columns as usize;
            let widths: f64 = slots[..c].iter().map(|s| s.rect.width()).sum();
            let heights: f64 = slots.iter().step_by(c).map(|s| s.rect.height()).sum();
            let gaps_w = f64::from(columns - 1) * config.gap;
            let gaps_h = f64::from(rows - 1) * config.gap;
            assert!(approx(widths + gaps_w, inner_w), "{columns}x{rows} width");
            assert!(approx(heights + gaps_h, inner_h), "{columns}x{rows} height");
            assert!(approx(slots[c - 1].rect.x1, 1920.0 - config.padding));
            assert!(approx(slots[slots.len() - 1].rect.y1, 1080.0 - config.padding));
        }
    }
}

#[test]
fn split_lengths_and_gaps_fill_the_padded_axis() {
    let config = cfg();
    let ratio_sets: [&[f64]; 6] = [
        &[50.0, 50.0],
        &[35.0, 65.0],
        &[20.0, 30.0, 50.0],
        &[25.0, 25.0, 25.0, 25.0],
        &[100.0],
        &[10.0, 20.0, 30.0, 40.0],
    ];
    for ratios in ratio_sets {
        for (axis, len) in [(Axis::Horizontal, 1840.0), (Axis::Vertical, 1000.0)] {
            let shape = LayoutShape::Split {
                axis,
                ratios: ratios.to_vec(),
            };
            let slots = compute_layout(&shape, None, &config).unwrap();
            assert_eq!(slots.len(), ratios.len());
            let total: f64 = slots
                .iter()
                .map(|s| match axis {
                    Axis::Horizontal => s.rect.width(),
                    Axis::Vertical => s.rect.height(),
                })
                .sum();
            let n = ratios.len() as f64;
            assert!(
                approx(total, len - config.gap * (n - 1.0)),
                "{ratios:?} {axis:?}: {total}"
            );
        }
    }
}

#[test]
fn focus_strip_positions() {
    let center = compute_layout(&LayoutShape::from_name("focus-strip"), None, &cfg()).unwrap();
    assert_eq!(center.len(), 2);
    assert_rect(center[0].rect, 0.0, 0.0, 1920.0, 1080.0);
    assert_rect(center[1].rect, 0.0, 378.0, 1920.0, 324.0);
    assert!(center[1].z > center[0].z);

    let top = compute_layout(&LayoutShape::strip(StripPosition::Top), None, &cfg()).unwrap();
    assert_rect(top[1].rect, 0.0, 54.0, 1920.0, 324.0);
    let bottom =
        compute_layout(&LayoutShape::strip(StripPosition::Bottom), None, &cfg()).unwrap();
    assert_rect(bottom[1].rect, 0.0, 702.0, 1920.0, 324.0);

    let too_tall = LayoutShape::Strip {
        position: StripPosition::Center,
        height_pct: 95.0,
    };
    assert!(compute_layout(&too_tall, None, &cfg()).is_err());
}

#[test]
fn hud_places_webcam_and_chat() {
    let slots = compute_layout(&LayoutShape::from_name("hud"), None, &cfg()).unwrap();
    assert_eq!(slots.len(), 3);
    assert_rect(slots[0].rect, 0.0, 0.0, 1920.0, 1080.0);
    assert_rect(slots[1].rect, 20.0, 20.0, 288.0, 162.0);
    assert_rect(slots[2].rect, 1420.0, 20.0, 480.0, 1040.0);
    assert_eq!((slots[0].z, slots[1].z, slots[2].z), (0, 10, 5));

    let corner = compute_layout(&LayoutShape::hud(Anchor::BottomRight), None, &cfg()).unwrap();
    assert_rect(corner[1].rect, 1612.0, 898.0, 288.0, 162.0);
}

#[test]
fn timeline_bar_and_content() {
    let bottom = compute_layout(&LayoutShape::from_name("timeline"), None, &cfg()).unwrap();
    assert_eq!(bottom.len(), 2);
    assert_rect(bottom[0].rect, 0.0, 0.0, 1920.0, 960.0);
    assert_rect(bottom[1].rect, 20.0, 980.0, 1880.0, 80.0);

    let top = compute_layout(&LayoutShape::timeline(BarPosition::Top), None, &cfg()).unwrap();
    assert_rect(top[0].rect, 0.0, 120.0, 1920.0, 960.0);
    assert_rect(top[1].rect, 20.0, 20.0, 1880.0, 80.0);

    let oversized = LayoutShape::Timeline {
        position: BarPosition::Bottom,
        bar_height: 1040.0,
        margin: 20.0,
    };
    assert!(compute_layout(&oversized, None, &cfg()).is_err());
}

#[test]
fn dialogue_multicam_and_vertical_layouts() {
    let dialogue = compute_layout(&LayoutShape::from_name("dialogue"), None, &cfg()).unwrap();
    assert_eq!(dialogue.len(), 2);
    assert_rect(dialogue[0].rect, 40.0, 40.0, 910.0, 1000.0);
    assert_rect(dialogue[1].rect, 970.0, 40.0, 910.0, 1000.0);

    let multicam = compute_layout(&LayoutShape::from_name("multicam"), None, &cfg()).unwrap();
    assert_eq!(multicam.len(), 4);
    assert_rect(multicam[3].rect, 970.0, 550.0, 910.0, 490.0);

    let portrait = LayoutConfig {
        canvas: Canvas {
            width: 1080,
            height: 1920,
        },
        padding: 20.0,
        gap: 10.0,
        border_width: 0.0,
    };
    let slots =
        compute_layout(&LayoutShape::from_name("vertical-layout-60"), None, &portrait).unwrap();
    assert_eq!(slots.len(), 3);
    let heights: Vec<f64> = slots.iter().map(|s| s.rect.height()).collect();
    assert!(heights[0] > heights[1] && heights[1] > heights[2]);
    assert!(approx(heights.iter().sum::<f64>() + 20.0, 1880.0));
    assert!(approx(slots[2].rect.y1, 1900.0));
}
