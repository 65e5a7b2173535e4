use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::ease::Ease,
    eval::apply::{FrameState, apply},
    foundation::core::{Progress, TargetId, Value},
    foundation::error::{ScrubError, ScrubResult},
    timeline::segment::{Segment, SegmentDef},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which segment decides a `(target, property)` pair written by several segments.
pub enum Overlap {
    /// Every segment writes its clamped value in registration order; the last one wins.
    #[default]
    LastRegistered,
    /// The started segment with the latest start wins (ties go to the later
    /// registration); before any has started, the earliest-starting segment supplies
    /// its `from` value.
    LatestStarted,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Timeline construction options.
pub struct TimelineOpts {
    /// Explicit axis length; defaults to the latest segment end.
    pub total_duration: Option<f64>,
    /// Tie-break for overlapping segments on the same pair.
    pub overlap: Overlap,
    /// Easing for segment definitions that do not name one.
    pub default_ease: Ease,
    /// Named positions on the axis, in timeline units.
    pub labels: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Validated, read-only sequence of segments on one normalized axis.
pub struct Timeline {
    segments: Vec<Segment>,
    total_duration: f64,
    overlap: Overlap,
    labels: BTreeMap<String, f64>,
}

impl Timeline {
    /// Validate `segments` and build a timeline with default options.
    pub fn build(segments: Vec<Segment>) -> ScrubResult<Self> {
        Self::build_with(segments, TimelineOpts::default())
    }

    /// Validate `segments` and build a timeline.
    pub fn build_with(segments: Vec<Segment>, opts: TimelineOpts) -> ScrubResult<Self> {
        Self::from_defs(segments.into_iter().map(SegmentDef::from).collect(), opts)
    }

    /// Resolve omitted `from`/`ease` fields, validate, and build a timeline.
    #[tracing::instrument(skip(defs, opts), fields(segments = defs.len()))]
    pub fn from_defs(defs: Vec<SegmentDef>, opts: TimelineOpts) -> ScrubResult<Self> {
        let mut segments: Vec<Segment> = Vec::with_capacity(defs.len());

        for (index, def) in defs.into_iter().enumerate() {
            let from = match def.from {
                Some(v) => v,
                None => resolve_from(&segments, &def)
                    .ok_or_else(|| {
                        ScrubError::invalid_segment(
                            index,
                            format!(
                                "{}.{}: no start value and the property has no rest value",
                                def.target, def.property
                            ),
                        )
                    })?
                    .adopt_zero_unit(&def.to),
            };
            let seg = Segment {
                target: def.target,
                property: def.property,
                from,
                to: def.to,
                start: def.start,
                duration: def.duration,
                ease: def.ease.unwrap_or(opts.default_ease),
            };
            seg.validate(index)?;
            segments.push(seg);
        }

        let latest_end = segments.iter().map(Segment::end).fold(0.0, f64::max);
        let total_duration = match opts.total_duration {
            Some(d) if !d.is_finite() || d <= 0.0 => {
                return Err(ScrubError::validation(format!(
                    "total duration must be > 0 (got {d})"
                )));
            }
            Some(d) => d,
            None => latest_end,
        };

        for (name, at) in &opts.labels {
            if name.is_empty() {
                return Err(ScrubError::validation("label names must be non-empty"));
            }
            if !at.is_finite() || *at < 0.0 {
                return Err(ScrubError::validation(format!(
                    "label '{name}' must be at a finite position >= 0 (got {at})"
                )));
            }
        }

        tracing::debug!(
            segments = segments.len(),
            total_duration,
            overlap = ?opts.overlap,
            "timeline built"
        );

        Ok(Self {
            segments,
            total_duration,
            overlap: opts.overlap,
            labels: opts.labels,
        })
    }

    /// Segments in registration order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Axis length in timeline units; zero for an empty timeline.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn overlap(&self) -> Overlap {
        self.overlap
    }

    pub fn labels(&self) -> &BTreeMap<String, f64> {
        &self.labels
    }

    /// Distinct targets touched by the timeline.
    pub fn targets(&self) -> BTreeSet<&TargetId> {
        self.segments.iter().map(|s| &s.target).collect()
    }

    /// Timeline time for `progress`.
    pub fn time_at(&self, progress: impl Into<Progress>) -> f64 {
        progress.into().get() * self.total_duration
    }

    /// Progress at timeline time `time`, clamped to `[0, 1]`.
    pub fn progress_at(&self, time: f64) -> Progress {
        if self.total_duration <= 0.0 {
            return Progress::START;
        }
        Progress::new(time / self.total_duration)
    }

    /// Progress of a named label, if defined.
    pub fn label_progress(&self, name: &str) -> Option<Progress> {
        self.labels.get(name).map(|t| self.progress_at(*t))
    }

    /// Evaluate every segment at `progress`.
    pub fn apply(&self, progress: impl Into<Progress>) -> FrameState {
        apply(self, progress)
    }
}

/// Start value for a `.to()`-style definition: the end value of the latest earlier
/// segment on the same pair that starts no later than `def`, else the rest value.
fn resolve_from(resolved: &[Segment], def: &SegmentDef) -> Option<Value> {
    resolved
        .iter()
        .filter(|s| s.target == def.target && s.property == def.property && s.start <= def.start)
        .fold(None::<&Segment>, |best, s| match best {
            Some(b) if b.start > s.start => Some(b),
            _ => Some(s),
        })
        .map(|s| s.to.clone())
        .or_else(|| def.property.rest_value())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
