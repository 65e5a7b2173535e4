use super::*;
use crate::foundation::core::Vec2;

fn props(entries: &[(Property, Value)]) -> PropertyMap {
    entries.iter().cloned().collect()
}

#[test]
fn transform_folds_translate_and_scale() {
    let p = props(&[
        (Property::X, Value::px(-220.0)),
        (Property::Y, Value::px(-320.0)),
        (Property::Scale, Value::Number(1.05)),
    ]);
    assert_eq!(
        inline_style(&p),
        "transform: translate(-220px, -320px) scale(1.05)"
    );
}

#[test]
fn missing_axis_defaults_to_zero() {
    let p = props(&[(Property::Y, Value::percent(-200.0))]);
    assert_eq!(transform_value(&p).unwrap(), "translate(0px, -200%)");
}

#[test]
fn bare_numbers_are_pixels_and_degrees() {
    let p = props(&[
        (Property::X, Value::Number(12.5)),
        (Property::Rotation, Value::Number(90.0)),
    ]);
    assert_eq!(
        transform_value(&p).unwrap(),
        "translate(12.5px, 0px) rotate(90deg)"
    );
}

#[test]
fn axis_scales_override_uniform_scale() {
    let p = props(&[
        (Property::Scale, Value::Number(2.0)),
        (Property::ScaleY, Value::Number(0.5)),
    ]);
    assert_eq!(transform_value(&p).unwrap(), "scale(2, 0.5)");
}

#[test]
fn composite_translate_is_rendered_in_pixels() {
    let p = props(&[(Property::Translate, Value::Vec2(Vec2::new(4.0, -8.0)))]);
    assert_eq!(transform_value(&p).unwrap(), "translate(4px, -8px)");
}

#[test]
fn non_transform_properties_follow_the_transform() {
    let p = props(&[
        (Property::Opacity, Value::Number(0.0)),
        (Property::PointerEvents, Value::keyword("none")),
        (Property::Custom("filter".into()), Value::keyword("blur(2px)")),
    ]);
    assert_eq!(
        inline_style(&p),
        "opacity: 0; pointer-events: none; filter: blur(2px)"
    );
}

#[test]
fn empty_map_renders_nothing() {
    assert_eq!(inline_style(&PropertyMap::new()), "");
    assert_eq!(transform_value(&PropertyMap::new()), None);
}
