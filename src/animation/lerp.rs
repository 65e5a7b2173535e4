use crate::foundation::core::Value;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Value {
    /// Incompatible pairs hold `a`; timelines reject them at build time.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => Value::Number(<f64 as Lerp>::lerp(x, y, t)),
            (
                Value::Length { amount: x, unit },
                Value::Length {
                    amount: y,
                    unit: unit_b,
                },
            ) if unit == unit_b => Value::Length {
                amount: <f64 as Lerp>::lerp(x, y, t),
                unit: *unit,
            },
            (Value::Vec2(x), Value::Vec2(y)) => Value::Vec2(x.lerp(*y, t)),
            // Discrete values flip only once the tween completes.
            (Value::Keyword(_), Value::Keyword(_)) if t >= 1.0 => b.clone(),
            _ => a.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
