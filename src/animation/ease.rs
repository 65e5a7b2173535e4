/// Easing curves mapping local segment progress `t` to an interpolation weight.
///
/// GSAP names are accepted on deserialization: `powerN` is the polynomial of degree
/// `N + 1` (`power1` = quad, `power2` = cubic, `power3` = quart).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    #[serde(alias = "none", alias = "linear")]
    Linear,
    #[serde(alias = "power1.in")]
    InQuad,
    #[serde(alias = "power1.out", alias = "power1")]
    OutQuad,
    #[serde(alias = "power1.inOut")]
    InOutQuad,
    #[serde(alias = "power2.in")]
    InCubic,
    #[serde(alias = "power2.out", alias = "power2")]
    OutCubic,
    #[serde(alias = "power2.inOut")]
    InOutCubic,
    #[serde(alias = "power3.in")]
    InQuart,
    #[serde(alias = "power3.out", alias = "power3")]
    OutQuart,
    #[serde(alias = "power3.inOut")]
    InOutQuart,
}

impl Ease {
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => in_out(t, 2),
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => in_out(t, 3),
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => in_out(t, 4),
        }
    }
}

fn in_out(t: f64, degree: i32) -> f64 {
    let k = f64::from(1 << (degree - 1));
    if t < 0.5 {
        k * t.powi(degree)
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(degree) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
