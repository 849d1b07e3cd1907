//! Integration tests for the property value model.

use sepal_css::{CssError, LengthUnit, UrlValue};
use sepal_style::{
    edges, flex, initial_value, lookup, parse_value, rule, BackgroundImage, CssProperty, Cursor,
    EdgeQuad, FlexShorthand, RuleShorthand, SingleValue, PROPERTY_NAMES,
};

#[test]
fn test_margin_round_trip() {
    let margin = EdgeQuad::parse(&edges::MARGIN, "25px").unwrap();
    assert_eq!(margin.css_text(), "25px");

    let via_registry = parse_value("margin", "25px").unwrap().unwrap();
    assert_eq!(via_registry.to_string(), "margin: 25px");
}

#[test]
fn test_float_edges_render_decimal() {
    let mut margin = EdgeQuad::new(&edges::MARGIN);
    margin
        .set_edges(
            (35.0, LengthUnit::Px),
            (25.0, LengthUnit::Px),
            (45.0, LengthUnit::Px),
            (25.0, LengthUnit::Px),
        )
        .unwrap();
    assert_eq!(margin.css_text(), "35.0px 25.0px 45.0px");

    margin.set_bottom(35.0, LengthUnit::Px).unwrap();
    assert_eq!(margin.css_text(), "35.0px 25.0px");

    margin.set_percent(50.0).unwrap();
    assert_eq!(margin.css_text(), "50.0%");
}

#[test]
fn test_flex_component_defaults() {
    assert_eq!(FlexShorthand::new(&flex::FLEX).css_text(), "0.0 1.0 auto");
    assert_eq!(FlexShorthand::parse(&flex::FLEX, "2 5 25px").unwrap().css_text(), "2.0 5.0 25px");
    assert_eq!(FlexShorthand::parse(&flex::FLEX, "25px").unwrap().css_text(), "1.0 1.0 25px");
}

#[test]
fn test_cleared_rule_slot_reads_inherit() {
    let mut border = RuleShorthand::parse(&rule::BORDER, "2px solid red").unwrap();
    let color = border.set_color(None).unwrap().unwrap();

    assert_eq!(color.css_text(), "red");
    assert!(!color.is_attached());
    assert_eq!(border.css_text(), "inherit");
    assert!(border.width().is_none());
    assert!(border.style().is_none());
    assert!(border.color().is_none());
}

#[test]
fn test_displaced_sub_value_keeps_its_value() {
    let mut border = RuleShorthand::parse(&rule::BORDER, "thin dotted red").unwrap();
    let wide = SingleValue::parse(&rule::BORDER_WIDTH, "5px").unwrap();

    let old = border.set_width(Some(wide)).unwrap().unwrap();
    assert_eq!(old.css_text(), "thin");
    assert!(!old.is_attached());
    assert_eq!(border.css_text(), "5px dotted red");
}

#[test]
fn test_sub_value_moves_between_shorthands() {
    let mut border = RuleShorthand::parse(&rule::BORDER, "2px solid red").unwrap();
    let width = border.set_width(None).unwrap().unwrap();
    assert_eq!(border.css_text(), "inherit");

    let mut left = RuleShorthand::parse(&rule::BORDER_LEFT, "thin dotted blue").unwrap();
    left.set_width(Some(width)).unwrap();
    assert_eq!(left.css_text(), "2px dotted blue");
}

#[test]
fn test_attached_clone_is_refused() {
    let mut border = RuleShorthand::parse(&rule::BORDER, "2px solid red").unwrap();
    let in_use = border.width().unwrap().clone();
    assert!(in_use.is_attached());

    let err = border.set_width(Some(in_use)).unwrap_err();
    assert!(matches!(err, CssError::OwnershipConflict { slot: "border-width" }));
    assert_eq!(border.css_text(), "2px solid red");
}

#[test]
fn test_url_ownership_shared_across_list_properties() {
    let image = BackgroundImage::from_paths(&["a.png"]).unwrap();
    let in_use = image.urls().unwrap()[0].clone();

    let err = Cursor::from_values(vec![in_use], "move").unwrap_err();
    assert!(matches!(err, CssError::OwnershipConflict { slot: "cursor" }));

    let fresh = UrlValue::from_path("b.cur");
    let cursor = Cursor::from_values(vec![fresh], "move").unwrap();
    assert_eq!(cursor.css_text(), "url(\"b.cur\"), move");
}

#[test]
fn test_background_image_quoting() {
    let image = BackgroundImage::from_paths(&["a.png", "b.png"]).unwrap();
    assert_eq!(image.css_text(), "url(\"a.png\"), url(\"b.png\")");

    let single = BackgroundImage::from_paths(&["a.png"]).unwrap();
    assert_eq!(single.css_text(), "url(\"a.png\")");
}

#[test]
fn test_registry_canonicalizes() {
    let cases = [
        ("margin", "25PX 25px", "25px"),
        ("padding", "1px 2px 1px 2px", "1px 2px"),
        ("border", "solid RED thick", "thick solid red"),
        ("border", "thin solid FireBrick", "thin solid firebrick"),
        ("outline", "inherit", "inherit"),
        ("flex", "auto", "1.0 1.0 auto"),
        ("columns", "2 10em", "10em 2"),
        ("column-rule", "dotted thin #AABBCC", "thin dotted #aabbcc"),
        ("background-image", "url('a.png') ,  url(b.png)", "url(\"a.png\"), url(\"b.png\")"),
        ("cursor", "url(pointer.png) 3 4, MOVE", "url(\"pointer.png\") 3 4, move"),
        ("opacity", "1", "1.0"),
    ];
    for (name, input, canonical) in cases {
        let value = parse_value(name, input).unwrap().unwrap();
        assert_eq!(value.css_text(), canonical, "canonical form of {name}: {input}");
    }
}

#[test]
fn test_setter_failure_preserves_state() {
    let mut value = parse_value("margin", "25px").unwrap().unwrap();
    assert!(value.set_css_text("banana").is_err());
    assert_eq!(value.css_text(), "25px");

    let mut value = parse_value("flex", "2 5 25px").unwrap().unwrap();
    assert!(value.set_css_text("2 5 25px 9").is_err());
    assert_eq!(value.css_text(), "2.0 5.0 25px");

    // multi-byte garbage is a grammar error like any other
    let mut value = parse_value("background-image", "url(a.png)").unwrap().unwrap();
    assert!(matches!(
        value.set_css_text("abcé"),
        Err(CssError::InvalidGrammar { .. })
    ));
    assert_eq!(value.css_text(), "url(\"a.png\")");
}

#[test]
fn test_keyword_and_numeric_states_are_exclusive() {
    let mut margin = EdgeQuad::parse(&edges::MARGIN, "auto").unwrap();
    assert_eq!(margin.keyword(), Some("auto"));
    assert!(margin.top().is_none());

    margin.set_css_text("25px").unwrap();
    assert!(margin.keyword().is_none());
    assert!(margin.top().is_some());
}

#[test]
fn test_every_default_is_reparseable() {
    for name in PROPERTY_NAMES {
        assert!(lookup(name).is_some(), "{name} has no kind");
        let value = initial_value(name).unwrap();
        let text = value.css_text();
        let reparsed = parse_value(name, &text).unwrap().unwrap();
        assert_eq!(reparsed.css_text(), text, "default of {name} does not round-trip");
    }
}
