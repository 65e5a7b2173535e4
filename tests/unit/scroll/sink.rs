use super::*;

#[test]
fn records_inline_styles_for_known_targets() {
    let mut sink = InlineStyleSink::new(["door"]);
    let door = TargetId::from("door");
    sink.set_property(&door, &Property::Scale, &Value::Number(1.6))
        .unwrap();
    sink.set_property(&door, &Property::Y, &Value::px(-30.0))
        .unwrap();

    assert_eq!(sink.writes(), 2);
    assert_eq!(
        sink.inline_style("door").unwrap(),
        "transform: translate(0px, -30px) scale(1.6)"
    );
    assert!(!sink.is_at_rest());
}

#[test]
fn unknown_targets_are_errors() {
    let mut sink = InlineStyleSink::new(["door"]);
    let err = sink
        .set_property(&TargetId::from("ghost"), &Property::Opacity, &Value::Number(0.0))
        .unwrap_err();
    assert!(err.to_string().contains("ghost"));
    assert!(!sink.has_target(&TargetId::from("ghost")));
}

#[test]
fn revert_returns_target_to_rest() {
    let mut sink = InlineStyleSink::new(["door"]);
    let door = TargetId::from("door");
    sink.set_property(&door, &Property::Opacity, &Value::Number(0.5))
        .unwrap();
    sink.revert(&door);
    assert!(sink.is_at_rest());
    assert_eq!(sink.inline_style("door"), None);
}

#[test]
fn pin_state_is_tracked() {
    let mut sink = InlineStyleSink::new(["stage"]);
    assert!(!sink.is_pinned());
    sink.set_pinned(true);
    assert!(sink.is_pinned());
}
