use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::parse("#00D9FF").unwrap(), Color::rgb(0, 217, 255));
    assert_eq!(Color::parse("#00d9ff40").unwrap(), Color::rgba(0, 217, 255, 64));
    assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
}

#[test]
fn parses_css_functions() {
    assert_eq!(
        Color::parse("rgba(255, 255, 255, 0.2)").unwrap(),
        Color::rgba(255, 255, 255, 51)
    );
    assert_eq!(
        Color::parse("rgb(10,14,26)").unwrap(),
        Color::rgb(10, 14, 26)
    );
}

#[test]
fn empty_and_none_are_transparent() {
    for s in ["", "none", "Transparent", "  "] {
        assert!(Color::parse(s).unwrap().is_transparent());
    }
}

#[test]
fn rejects_garbage() {
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#gg0000").is_err());
    assert!(Color::parse("hsl(1, 2, 3)").is_err());
    assert!(Color::parse("rgba(1, 2)").is_err());
}

#[test]
fn serde_uses_hex_and_accepts_arrays() {
    let c = Color::rgba(1, 2, 3, 4);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#01020304\"");
    let back: Color = serde_json::from_str("\"#01020304\"").unwrap();
    assert_eq!(back, c);
    let arr: Color = serde_json::from_str("[9, 8, 7]").unwrap();
    assert_eq!(arr, Color::rgb(9, 8, 7));
    assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
}

#[test]
fn with_alpha_rounds() {
    assert_eq!(Color::WHITE.with_alpha(0.5).a, 128);
    assert_eq!(Color::WHITE.with_alpha(2.0).a, 255);
}
