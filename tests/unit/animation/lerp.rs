use super::*;
use crate::foundation::core::Vec2;

#[test]
fn numbers_and_lengths_interpolate_linearly() {
    let Value::Number(mid) = Value::lerp(&Value::Number(1.0), &Value::Number(1.6), 0.5) else {
        panic!("expected a number");
    };
    assert!((mid - 1.3).abs() < 1e-12);
    assert_eq!(
        Value::lerp(&Value::px(0.0), &Value::px(-60.0), 0.25),
        Value::px(-15.0)
    );
}

#[test]
fn vec2_interpolates_component_wise() {
    let a = Value::Vec2(Vec2::new(0.0, 10.0));
    let b = Value::Vec2(Vec2::new(-220.0, 20.0));
    assert_eq!(
        Value::lerp(&a, &b, 0.5),
        Value::Vec2(Vec2::new(-110.0, 15.0))
    );
    assert_eq!(
        Value::lerp(&a, &b, 0.25),
        Value::Vec2(Vec2::new(-55.0, 12.5))
    );
}

#[test]
fn keywords_switch_at_completion() {
    let a = Value::keyword("auto");
    let b = Value::keyword("none");
    assert_eq!(Value::lerp(&a, &b, 0.0), a);
    assert_eq!(Value::lerp(&a, &b, 0.99), a);
    assert_eq!(Value::lerp(&a, &b, 1.0), b);
}

#[test]
fn mismatched_units_hold_start_value() {
    let a = Value::px(5.0);
    let b = Value::percent(50.0);
    assert_eq!(Value::lerp(&a, &b, 0.7), a);
}
