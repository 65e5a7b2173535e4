use crate::{
    animation::ease::Ease,
    foundation::core::{Property, TargetId, Value},
    foundation::error::{ScrubError, ScrubResult},
    timeline::model::{Overlap, Timeline, TimelineOpts},
    timeline::segment::SegmentDef,
};

/// Tween length used when a [`Tween`] does not set one.
pub const DEFAULT_TWEEN_DURATION: f64 = 0.5;

/// One authored tween: several properties of one target animated together.
///
/// Expands into one [`SegmentDef`] per property.
#[derive(Clone, Debug)]
pub struct Tween {
    target: TargetId,
    props: Vec<(Property, Option<Value>, Value)>,
    duration: f64,
    at: Option<f64>,
    ease: Option<Ease>,
}

impl Tween {
    /// Start a tween on `target`.
    pub fn on(target: impl Into<TargetId>) -> Self {
        Self {
            target: target.into(),
            props: Vec::new(),
            duration: DEFAULT_TWEEN_DURATION,
            at: None,
            ease: None,
        }
    }

    /// Animate `property` from wherever it is toward `to`.
    pub fn to(mut self, property: Property, to: impl Into<Value>) -> Self {
        self.props.push((property, None, to.into()));
        self
    }

    /// Animate `property` from an explicit value toward `to`.
    pub fn from_to(
        mut self,
        property: Property,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        self.props.push((property, Some(from.into()), to.into()));
        self
    }

    /// Tween length in timeline units.
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Absolute start position; tweens without one are appended at the current end.
    pub fn at(mut self, at: f64) -> Self {
        self.at = Some(at);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// Builder for [`Timeline`](crate::Timeline).
#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    opts: TimelineOpts,
    defs: Vec<SegmentDef>,
    cursor: f64,
}

impl TimelineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Easing for tweens that do not name one.
    pub fn default_ease(mut self, ease: Ease) -> Self {
        self.opts.default_ease = ease;
        self
    }

    pub fn overlap(mut self, overlap: Overlap) -> Self {
        self.opts.overlap = overlap;
        self
    }

    /// Fix the axis length instead of deriving it from the latest tween end.
    pub fn total_duration(mut self, total: f64) -> Self {
        self.opts.total_duration = Some(total);
        self
    }

    /// Name a position on the axis.
    pub fn label(mut self, name: impl Into<String>, at: f64) -> ScrubResult<Self> {
        let name = name.into();
        if self.opts.labels.contains_key(&name) {
            return Err(ScrubError::validation(format!("duplicate label '{name}'")));
        }
        self.opts.labels.insert(name, at);
        Ok(self)
    }

    /// Append a tween.
    pub fn tween(mut self, tween: Tween) -> Self {
        let start = tween.at.unwrap_or(self.cursor);
        for (property, from, to) in tween.props {
            self.defs.push(SegmentDef {
                target: tween.target.clone(),
                property,
                from,
                to,
                start,
                duration: tween.duration,
                ease: tween.ease,
            });
        }
        let end = start + tween.duration;
        if end.is_finite() {
            self.cursor = self.cursor.max(end);
        }
        self
    }

    /// Resolve, validate and build the final [`Timeline`](crate::Timeline).
    pub fn build(self) -> ScrubResult<Timeline> {
        Timeline::from_defs(self.defs, self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
