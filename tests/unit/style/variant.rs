use super::*;

#[test]
fn title_names_resolve_and_unknown_falls_back_to_bold() {
    assert_eq!(TitleVariant::from_name("kinetic"), TitleVariant::Kinetic);
    assert_eq!(TitleVariant::from_name("GLASS"), TitleVariant::Glass);
    assert_eq!(TitleVariant::from_name("neon"), TitleVariant::Bold);
    assert_eq!(TitleVariant::from_name(""), TitleVariant::Bold);
}

#[test]
fn every_name_round_trips() {
    for v in TitleVariant::ALL {
        assert_eq!(TitleVariant::from_name(v.name()), *v);
    }
    for v in CodeVariant::ALL {
        assert_eq!(CodeVariant::from_name(v.name()), *v);
    }
}

#[test]
fn title_styles_follow_variant_rules() {
    let bold = TitleVariant::Bold.style();
    assert_eq!(bold.font_size_px, 120.0);
    assert!(bold.background.is_transparent());

    let kinetic = TitleVariant::Kinetic.style();
    assert_eq!(kinetic.font_weight, 900);
    assert!(kinetic.uppercase);
    assert_eq!(kinetic.font_size_px, 96.0);

    assert_eq!(TitleVariant::Glass.style().background.a, 217);
}

#[test]
fn code_variant_falls_back_to_editor() {
    assert_eq!(CodeVariant::from_name("vim"), CodeVariant::Editor);
    let hacker = CodeVariant::Hacker.style();
    assert_eq!(hacker.border_color, Color::rgb(0, 217, 255));
    assert_eq!(CodeVariant::Minimal.style().border_width, 0.0);
}

#[test]
fn serde_is_lenient() {
    let v: TitleVariant = serde_json::from_str("\"fancy\"").unwrap();
    assert_eq!(v, TitleVariant::Bold);
    assert_eq!(
        serde_json::to_string(&TitleVariant::Minimal).unwrap(),
        "\"minimal\""
    );
}

#[test]
fn style_table_falls_back_to_default() {
    let table = StyleTable::new("default", 1u32)
        .with("loud", 2)
        .with("Quiet-Mode", 3);
    assert_eq!(*table.resolve("loud"), 2);
    assert_eq!(*table.resolve("quiet_mode"), 3);
    assert_eq!(*table.resolve("missing"), 1);
    assert_eq!(*table.resolve("DEFAULT"), 1);
    assert!(table.contains("default"));
    assert!(!table.contains("missing"));
}

#[test]
fn style_table_default_can_be_replaced() {
    let mut table = StyleTable::new("base", "a");
    table.insert("base", "b");
    assert_eq!(*table.default_style(), "b");
    assert_eq!(*table.resolve("nope"), "b");
}
