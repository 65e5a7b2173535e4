use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ScrubError, ScrubResult};

pub use kurbo::Vec2;

/// Identifier of an animated element (an element id or class on the host page).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Normalized timeline progress, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamp `p` into `[0, 1]`; NaN maps to 0.
    pub fn new(p: f64) -> Self {
        if p.is_nan() {
            return Self::START;
        }
        Self(p.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(p: f64) -> Self {
        Self::new(p)
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(d)?;
        Ok(Self::new(raw))
    }
}

/// An animatable property of a target.
///
/// Names follow CSS/GSAP conventions when parsed from or written to strings.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Property {
    X,
    Y,
    /// Composite 2-D translation, interpolated component-wise.
    Translate,
    Scale,
    ScaleX,
    ScaleY,
    Rotation,
    Opacity,
    PointerEvents,
    Custom(String),
}

impl Property {
    pub fn name(&self) -> &str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Translate => "translate",
            Self::Scale => "scale",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Rotation => "rotation",
            Self::Opacity => "opacity",
            Self::PointerEvents => "pointerEvents",
            Self::Custom(name) => name,
        }
    }

    /// Value a target shows when nothing has animated this property.
    ///
    /// Custom properties have no implicit rest value.
    pub fn rest_value(&self) -> Option<Value> {
        match self {
            Self::X | Self::Y => Some(Value::px(0.0)),
            Self::Translate => Some(Value::Vec2(Vec2::ZERO)),
            Self::Scale | Self::ScaleX | Self::ScaleY | Self::Opacity => Some(Value::Number(1.0)),
            Self::Rotation => Some(Value::Length {
                amount: 0.0,
                unit: Unit::Deg,
            }),
            Self::PointerEvents => Some(Value::keyword("auto")),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = ScrubError;

    fn from_str(s: &str) -> ScrubResult<Self> {
        let p = match s {
            "x" => Self::X,
            "y" => Self::Y,
            "translate" => Self::Translate,
            "scale" => Self::Scale,
            "scaleX" => Self::ScaleX,
            "scaleY" => Self::ScaleY,
            "rotation" | "rotate" => Self::Rotation,
            "opacity" => Self::Opacity,
            "pointerEvents" | "pointer-events" => Self::PointerEvents,
            "" => return Err(ScrubError::validation("property name must be non-empty")),
            other => Self::Custom(other.to_string()),
        };
        Ok(p)
    }
}

impl TryFrom<String> for Property {
    type Error = ScrubError;

    fn try_from(s: String) -> ScrubResult<Self> {
        s.parse()
    }
}

impl From<Property> for String {
    fn from(p: Property) -> Self {
        p.name().to_string()
    }
}

/// Unit attached to a [`Value::Length`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Unit {
    Px,
    Percent,
    Deg,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Deg => "deg",
        }
    }
}

/// A property value at one point of the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ValueRepr", into = "ValueRepr")]
pub enum Value {
    Number(f64),
    Length { amount: f64, unit: Unit },
    /// Composite value interpolated component-wise.
    Vec2(Vec2),
    /// Discrete value; switches from `from` to `to` when a segment completes.
    Keyword(String),
}

impl Value {
    pub fn px(amount: f64) -> Self {
        Self::Length {
            amount,
            unit: Unit::Px,
        }
    }

    pub fn percent(amount: f64) -> Self {
        Self::Length {
            amount,
            unit: Unit::Percent,
        }
    }

    pub fn keyword(k: impl Into<String>) -> Self {
        Self::Keyword(k.into())
    }

    /// Parse `"12"`, `"-200%"`, `"30px"`, `"45deg"`; anything else becomes a keyword.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        for unit in [Unit::Px, Unit::Percent, Unit::Deg] {
            if let Some(num) = t.strip_suffix(unit.suffix())
                && let Ok(amount) = num.trim().parse::<f64>()
            {
                return Self::Length { amount, unit };
            }
        }
        match t.parse::<f64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Keyword(t.to_string()),
        }
    }

    /// True when `self` and `other` can be interpolated against each other.
    pub fn is_compatible(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(_), Self::Number(_)) => true,
            (Self::Length { unit: a, .. }, Self::Length { unit: b, .. }) => a == b,
            (Self::Vec2(_), Self::Vec2(_)) => true,
            (Self::Keyword(_), Self::Keyword(_)) => true,
            _ => false,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Number(n) => n.is_finite(),
            Self::Length { amount, .. } => amount.is_finite(),
            Self::Vec2(v) => v.x.is_finite() && v.y.is_finite(),
            Self::Keyword(_) => true,
        }
    }

    /// Re-unit a zero length so it can start a tween toward `to`.
    ///
    /// `0px` and `0%` are the same resting position.
    pub fn adopt_zero_unit(self, to: &Self) -> Self {
        match (&self, to) {
            (Self::Length { amount, .. }, Self::Length { unit, .. }) if *amount == 0.0 => {
                Self::Length {
                    amount: 0.0,
                    unit: *unit,
                }
            }
            _ => self,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Length { .. } => "length",
            Self::Vec2(_) => "vec2",
            Self::Keyword(_) => "keyword",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&fmt_num(*n)),
            Self::Length { amount, unit } => write!(f, "{}{}", fmt_num(*amount), unit.suffix()),
            Self::Vec2(v) => write!(f, "{}, {}", fmt_num(v.x), fmt_num(v.y)),
            Self::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Number(f64),
    Pair([f64; 2]),
    Text(String),
}

impl TryFrom<ValueRepr> for Value {
    type Error = ScrubError;

    fn try_from(r: ValueRepr) -> ScrubResult<Self> {
        let v = match r {
            ValueRepr::Number(n) => Self::Number(n),
            ValueRepr::Pair([x, y]) => Self::Vec2(Vec2::new(x, y)),
            ValueRepr::Text(s) => {
                if s.trim().is_empty() {
                    return Err(ScrubError::serde("property value must be non-empty"));
                }
                Self::parse(&s)
            }
        };
        Ok(v)
    }
}

impl From<Value> for ValueRepr {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => Self::Number(n),
            Value::Vec2(p) => Self::Pair([p.x, p.y]),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Format a float with at most four decimals and no trailing zeros.
pub(crate) fn fmt_num(n: f64) -> String {
    let s = format!("{n:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
