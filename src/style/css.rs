use crate::{
    eval::apply::PropertyMap,
    foundation::core::{Property, Unit, Value, fmt_num},
};

/// Render a target's properties as an inline CSS declaration list.
///
/// Transform components are folded into one `transform` declaration in
/// translate, rotate, scale order. Bare numbers on length properties are pixels
/// (rotation: degrees).
pub fn inline_style(props: &PropertyMap) -> String {
    let mut decls: Vec<String> = Vec::new();

    if let Some(transform) = transform_value(props) {
        decls.push(format!("transform: {transform}"));
    }
    for (property, value) in props {
        match property {
            Property::Opacity => decls.push(format!("opacity: {value}")),
            Property::PointerEvents => decls.push(format!("pointer-events: {value}")),
            Property::Custom(name) => decls.push(format!("{name}: {value}")),
            _ => {}
        }
    }

    decls.join("; ")
}

/// The `transform` value for `props`, or `None` when nothing transforms.
pub fn transform_value(props: &PropertyMap) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    let x = props.get(&Property::X);
    let y = props.get(&Property::Y);
    if x.is_some() || y.is_some() {
        parts.push(format!(
            "translate({}, {})",
            length_or_zero(x, Unit::Px),
            length_or_zero(y, Unit::Px)
        ));
    }
    if let Some(Value::Vec2(v)) = props.get(&Property::Translate) {
        parts.push(format!("translate({}px, {}px)", fmt_num(v.x), fmt_num(v.y)));
    }
    if let Some(r) = props.get(&Property::Rotation) {
        parts.push(format!("rotate({})", length_or_zero(Some(r), Unit::Deg)));
    }

    let uniform = props.get(&Property::Scale);
    let sx = props.get(&Property::ScaleX).or(uniform);
    let sy = props.get(&Property::ScaleY).or(uniform);
    match (sx, sy) {
        (None, None) => {}
        (Some(a), Some(b)) if a == b => parts.push(format!("scale({a})")),
        (a, b) => parts.push(format!(
            "scale({}, {})",
            a.map_or_else(|| "1".to_string(), Value::to_string),
            b.map_or_else(|| "1".to_string(), Value::to_string)
        )),
    }

    (!parts.is_empty()).then(|| parts.join(" "))
}

fn length_or_zero(v: Option<&Value>, unit: Unit) -> String {
    match v {
        Some(Value::Number(n)) => format!("{}{}", fmt_num(*n), unit.suffix()),
        Some(other) => other.to_string(),
        None => format!("0{}", unit.suffix()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/css.rs"]
mod tests;
