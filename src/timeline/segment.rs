use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::core::{Property, TargetId, Value},
    foundation::error::{ScrubError, ScrubResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One animated property change scheduled on the timeline axis.
pub struct Segment {
    /// Element the segment writes to.
    pub target: TargetId,
    /// Property written on `target`.
    pub property: Property,
    /// Value before `start`.
    pub from: Value,
    /// Value after `start + duration`.
    pub to: Value,
    /// Start offset in timeline units.
    pub start: f64,
    /// Length in timeline units; must be > 0.
    pub duration: f64,
    /// Easing applied to local progress.
    #[serde(default)]
    pub ease: Ease,
}

impl Segment {
    /// Create a linear segment.
    pub fn new(
        target: impl Into<TargetId>,
        property: Property,
        from: impl Into<Value>,
        to: impl Into<Value>,
        start: f64,
        duration: f64,
    ) -> Self {
        Self {
            target: target.into(),
            property,
            from: from.into(),
            to: to.into(),
            start,
            duration,
            ease: Ease::Linear,
        }
    }

    /// Replace the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Timeline time at which the segment reaches `to`.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Local progress in `[0, 1]` at timeline time `time`.
    pub fn local_progress(&self, time: f64) -> f64 {
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at timeline time `time`, clamped outside the segment.
    ///
    /// Endpoints are returned exactly, so a finished segment reads back `to` verbatim.
    pub fn value_at(&self, time: f64) -> Value {
        let w = self.ease.apply(self.local_progress(time));
        if w <= 0.0 {
            return self.from.clone();
        }
        if w >= 1.0 {
            return self.to.clone();
        }
        Value::lerp(&self.from, &self.to, w)
    }

    pub(crate) fn validate(&self, index: usize) -> ScrubResult<()> {
        let fail = |reason: String| {
            Err(ScrubError::invalid_segment(
                index,
                format!("{}.{}: {reason}", self.target, self.property),
            ))
        };

        if self.target.as_str().is_empty() {
            return fail("target id must be non-empty".to_string());
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return fail(format!("duration must be > 0 (got {})", self.duration));
        }
        if !self.start.is_finite() || self.start < 0.0 {
            return fail(format!("start offset must be >= 0 (got {})", self.start));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return fail("from/to values must be finite".to_string());
        }
        if !self.from.is_compatible(&self.to) {
            return fail(format!(
                "cannot interpolate {} '{}' toward {} '{}'",
                self.from.kind_name(),
                self.from,
                self.to.kind_name(),
                self.to
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Segment as authored: `from` and `ease` may be left to the timeline.
///
/// An omitted `from` starts where earlier segments on the same target property left
/// off, or at the property's rest value.
pub struct SegmentDef {
    /// Element the segment writes to.
    pub target: TargetId,
    /// Property written on `target`.
    pub property: Property,
    /// Explicit start value.
    pub from: Option<Value>,
    /// End value.
    pub to: Value,
    /// Start offset in timeline units.
    pub start: f64,
    /// Length in timeline units.
    pub duration: f64,
    /// Explicit easing; the timeline default applies when `None`.
    pub ease: Option<Ease>,
}

impl From<Segment> for SegmentDef {
    fn from(s: Segment) -> Self {
        Self {
            target: s.target,
            property: s.property,
            from: Some(s.from),
            to: s.to,
            start: s.start,
            duration: s.duration,
            ease: Some(s.ease),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
