use super::*;

#[test]
fn codes_roundtrip_and_unknown_codes_are_rejected() {
    assert_eq!(ShapeKind::try_from(0).unwrap(), ShapeKind::Circle);
    assert_eq!(ShapeKind::try_from(1).unwrap(), ShapeKind::Rectangle);
    assert_eq!(ShapeKind::Circle.code(), 0);
    assert_eq!(ShapeKind::Rectangle.code(), 1);

    let err = ShapeKind::try_from(7).unwrap_err();
    assert!(err.to_string().contains("unsupported shape code 7"));
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!(" Circle ".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
    assert_eq!("RECT".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
    assert!("triangle".parse::<ShapeKind>().is_err());
}

#[test]
fn default_shape_is_borderless_rectangle() {
    let spec = ShapeSpec::default();
    assert_eq!(spec.kind, ShapeKind::Rectangle);
    assert_eq!(spec.border_width(), 0.0);
}

#[test]
fn serde_uses_snake_case_kind_and_optional_border() {
    let spec: ShapeSpec = serde_json::from_str(r##"{ "kind": "circle" }"##).unwrap();
    assert_eq!(spec, ShapeSpec::new(ShapeKind::Circle));

    let spec: ShapeSpec = serde_json::from_str(
        r##"{ "kind": "rectangle", "border": { "width": 4, "color": "#ff0000" } }"##,
    )
    .unwrap();
    assert_eq!(spec.border_width(), 4.0);
    assert_eq!(spec.border.unwrap().color, Argb(0xFFFF_0000));
}
