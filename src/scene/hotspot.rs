use crate::{
    animation::ease::Ease,
    foundation::core::Progress,
    scroll::binding::ScrollBinding,
};

/// Easing for hotspot-driven progress tweens.
pub const HOTSPOT_EASE: Ease = Ease::OutQuad;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// What activating a hotspot does.
pub enum HotspotAction {
    /// Leave the scene for another page.
    Navigate { href: String },
    /// Animate timeline progress to a fixed value.
    TweenToProgress { progress: f64, duration_secs: f64 },
    /// Animate timeline progress to a named label.
    TweenToLabel { label: String, duration_secs: f64 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A clickable control in the scene.
pub struct Hotspot {
    pub id: String,
    /// Accessible name of the control.
    pub label: String,
    pub action: HotspotAction,
}

#[derive(Clone, Debug, PartialEq)]
/// Result of [`Hotspot::activate`].
pub enum HotspotOutcome {
    /// The host should navigate to this location.
    Navigate(String),
    /// A progress tween toward this value was started.
    Tweening(Progress),
    /// Nothing happened (binding disposed or label unknown).
    Ignored,
}

impl Hotspot {
    pub fn new(id: impl Into<String>, label: impl Into<String>, action: HotspotAction) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action,
        }
    }

    /// Run the hotspot's action against `binding`.
    pub fn activate(&self, binding: &ScrollBinding) -> HotspotOutcome {
        match &self.action {
            HotspotAction::Navigate { href } => HotspotOutcome::Navigate(href.clone()),
            _ if !binding.is_bound() => {
                tracing::debug!(hotspot = %self.id, "binding not active; hotspot ignored");
                HotspotOutcome::Ignored
            }
            HotspotAction::TweenToProgress {
                progress,
                duration_secs,
            } => {
                let p = Progress::new(*progress);
                binding.tween_to(p, *duration_secs, HOTSPOT_EASE);
                HotspotOutcome::Tweening(p)
            }
            HotspotAction::TweenToLabel {
                label,
                duration_secs,
            } => match binding.tween_to_label(label, *duration_secs, HOTSPOT_EASE) {
                Ok(p) => HotspotOutcome::Tweening(p),
                Err(e) => {
                    tracing::warn!(hotspot = %self.id, error = %e, "hotspot ignored");
                    HotspotOutcome::Ignored
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hotspot.rs"]
mod tests;
