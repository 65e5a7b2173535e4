use crate::foundation::core::Progress;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scroll geometry reported by the host.
pub struct ScrollMetrics {
    /// Document scroll offset in px.
    pub scroll_y: f64,
    /// Visible viewport height in px.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// `false` when the scroll container cannot drive a timeline (no height, NaN, ...).
    pub fn is_usable(&self) -> bool {
        self.scroll_y.is_finite() && self.viewport_height.is_finite() && self.viewport_height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Length of the pinned scroll range.
pub enum PinLength {
    /// Fixed length in px.
    Pixels(f64),
    /// Multiple of the viewport height, re-resolved on every resize.
    Viewports(f64),
}

impl PinLength {
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Viewports(n) => n * viewport_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scroll range that drives a timeline: starts when the trigger's top reaches the
/// viewport top and lasts `length`.
pub struct TriggerRange {
    /// Scroll offset at which progress is 0.
    pub start_px: f64,
    pub length: PinLength,
}

impl TriggerRange {
    pub fn new(start_px: f64, length: PinLength) -> Self {
        Self { start_px, length }
    }

    /// Resolved `(start, end)` scroll offsets, or `None` if the range is degenerate.
    pub fn bounds(&self, metrics: &ScrollMetrics) -> Option<(f64, f64)> {
        if !metrics.is_usable() || !self.start_px.is_finite() {
            return None;
        }
        let len = self.length.resolve(metrics.viewport_height);
        if !len.is_finite() || len <= 0.0 {
            return None;
        }
        Some((self.start_px, self.start_px + len))
    }

    /// Timeline progress for the current scroll offset.
    ///
    /// Monotonic and continuous in `scroll_y`; `None` when the container is unusable.
    pub fn progress(&self, metrics: &ScrollMetrics) -> Option<Progress> {
        let (start, end) = self.bounds(metrics)?;
        Some(Progress::new((metrics.scroll_y - start) / (end - start)))
    }

    /// True while the viewport should stay pinned.
    pub fn is_pinned(&self, metrics: &ScrollMetrics) -> bool {
        self.bounds(metrics)
            .is_some_and(|(start, end)| (start..=end).contains(&metrics.scroll_y))
    }

    /// Scroll offset that corresponds to `progress`, e.g. to sync the page after a seek.
    pub fn scroll_for(&self, progress: Progress, metrics: &ScrollMetrics) -> Option<f64> {
        let (start, end) = self.bounds(metrics)?;
        Some(start + progress.get() * (end - start))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
