use super::*;
use crate::{
    animation::entrance::EntranceKind,
    composition::{
        content::Content,
        dsl::CompositionBuilder,
        model::{LayoutScene, TitleScene, TypingCodeScene},
    },
    style::{color::Color, variant::TitleVariant},
};

fn two_scene_timeline() -> Timeline {
    let comp = CompositionBuilder::default()
        .then("title", 90, TitleScene::new("Hello"))
        .then("code", 120, TypingCodeScene::new("fn main() {}"))
        .build()
        .unwrap();
    Timeline::new(comp).unwrap()
}

fn text_of(node: &VisualNode) -> Option<&str> {
    match &node.paint {
        Paint::Text { text, .. } | Paint::Code { text, .. } => Some(text),
        _ => None,
    }
}

#[test]
fn only_active_scenes_emit_nodes() {
    let tl = two_scene_timeline();
    let f = tl.eval_frame(FrameIndex(10)).unwrap();
    assert!(!f.nodes.is_empty());
    assert!(f.nodes.iter().all(|n| n.scene_id == "title"));

    let f = tl.eval_frame(FrameIndex(90)).unwrap();
    assert!(f.nodes.iter().all(|n| n.scene_id == "code"));
}

#[test]
fn frames_past_the_end_are_errors() {
    let tl = two_scene_timeline();
    assert_eq!(tl.duration(), FrameIndex(210));
    assert!(tl.eval_frame(FrameIndex(209)).is_ok());
    assert!(matches!(
        tl.eval_frame(FrameIndex(210)),
        Err(FramekitError::Evaluation(_))
    ));
}

#[test]
fn title_fades_in_and_out() {
    let tl = two_scene_timeline();
    let opacity = |f: u64| {
        let d = tl.eval_frame(FrameIndex(f)).unwrap();
        d.nodes
            .iter()
            .find(|n| text_of(n) == Some("Hello"))
            .map(|n| n.opacity)
            .unwrap()
    };
    assert_eq!(opacity(0), 0.0);
    assert!((opacity(10) - 0.5).abs() < 1e-9);
    assert_eq!(opacity(40), 1.0);
    assert!((opacity(80) - 0.5).abs() < 1e-9);
}

#[test]
fn typing_code_reveals_over_time() {
    let tl = two_scene_timeline();
    let code_at = |f: u64| -> String {
        let d = tl.eval_frame(FrameIndex(f)).unwrap();
        d.nodes
            .iter()
            .find_map(|n| match &n.paint {
                Paint::Code { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(code_at(90), "");
    assert_eq!(code_at(90 + 12), "fn ");
    assert_eq!(code_at(209), "fn main() {}");
}

#[test]
fn kinetic_title_is_uppercased_over_a_background() {
    let mut title = TitleScene::new("go fast");
    title.variant = TitleVariant::Kinetic;
    title.animation = EntranceKind::Typewriter;
    let comp = CompositionBuilder::default()
        .then("t", 120, title)
        .build()
        .unwrap();
    let tl = Timeline::new(comp).unwrap();
    let f = tl.eval_frame(FrameIndex(30)).unwrap();
    assert!(matches!(f.nodes[0].paint, Paint::Fill { .. }));
    let text = f.nodes.iter().find_map(text_of).unwrap();
    // 7 chars over 60 frames: floor(3.5) at frame 30
    assert_eq!(text, "GO ");
}

#[test]
fn layout_scene_places_items_in_slots() {
    let scene = LayoutScene {
        border_width: 2.0,
        cell_background: Color::rgb(10, 10, 10),
        ..LayoutScene::new("2x2")
    }
    .item(Content::Solid {
        color: Color::rgb(255, 0, 0),
    })
    .item(Content::Label { text: "B".into() });
    let comp = CompositionBuilder::default()
        .then("grid", 30, scene)
        .build()
        .unwrap();
    let tl = Timeline::new(comp).unwrap();
    assert_eq!(tl.layout(0).unwrap().slots().len(), 4);

    let f = tl.eval_frame(FrameIndex(0)).unwrap();
    // every slot: background + border; slot 0 solid; slot 1 label strip + text
    assert_eq!(f.nodes.len(), 4 * 2 + 1 + 2);
    let solid = f
        .nodes
        .iter()
        .find(|n| matches!(n.paint, Paint::Fill { color, .. } if color == Color::rgb(255, 0, 0)))
        .unwrap();
    assert_eq!(solid.slot, Some(0));
    assert_eq!(solid.rect, Rect::new(42.0, 42.0, 948.0, 528.0));
    assert!(f.nodes.iter().any(|n| n.slot == Some(3)));
}

#[test]
fn bad_layout_fails_at_construction() {
    let scene = LayoutScene {
        gap: 2000.0,
        ..LayoutScene::new("3x3")
    };
    let comp = CompositionBuilder::default()
        .then("grid", 30, scene)
        .build()
        .unwrap();
    assert!(matches!(Timeline::new(comp), Err(FramekitError::Layout(_))));
}

#[test]
fn nodes_are_sorted_by_z_then_scene_order() {
    let comp = CompositionBuilder::default()
        .at("pip", 0, 30, 5, LayoutScene::new("pip").item(Content::Empty).item(Content::Solid {
            color: Color::WHITE,
        }))
        .at("base", 0, 30, 0, TitleScene::new("Base"))
        .at("top", 0, 30, 0, TitleScene::new("Top"))
        .build()
        .unwrap();
    let tl = Timeline::new(comp).unwrap();
    let f = tl.eval_frame(FrameIndex(25)).unwrap();
    let order: Vec<&str> = f.nodes.iter().map(|n| n.scene_id.as_str()).collect();
    assert_eq!(order, vec!["base", "top", "pip"]);
    assert_eq!(f.nodes[2].z, 105);
}

#[test]
fn eval_is_pure() {
    let tl = two_scene_timeline();
    let a = tl.eval_frame(FrameIndex(100)).unwrap();
    let _ = tl.eval_frame(FrameIndex(5)).unwrap();
    let b = tl.eval_frame(FrameIndex(100)).unwrap();
    assert_eq!(a, b);
}
