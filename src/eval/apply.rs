use std::collections::BTreeMap;

use crate::{
    foundation::core::{Progress, Property, TargetId, Value},
    timeline::model::{Overlap, Timeline},
};

/// Properties written on one target.
pub type PropertyMap = BTreeMap<Property, Value>;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
/// Visual state of every target at one progress value: `target -> property -> value`.
pub struct FrameState {
    targets: BTreeMap<TargetId, PropertyMap>,
}

impl FrameState {
    pub fn get(&self, target: &str, property: &Property) -> Option<&Value> {
        self.targets
            .get(&TargetId::from(target))
            .and_then(|props| props.get(property))
    }

    pub fn target(&self, target: &TargetId) -> Option<&PropertyMap> {
        self.targets.get(target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TargetId, &PropertyMap)> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Drop every target rejected by `keep`.
    pub fn retain_targets(&mut self, mut keep: impl FnMut(&TargetId) -> bool) {
        self.targets.retain(|t, _| keep(t));
    }

    fn insert(&mut self, target: &TargetId, property: &Property, value: Value) {
        self.targets
            .entry(target.clone())
            .or_default()
            .insert(property.clone(), value);
    }
}

#[derive(Clone, Copy)]
struct Choice {
    index: usize,
    started: bool,
}

/// Evaluate `timeline` at `progress` (clamped to `[0, 1]`).
///
/// Pure: the same timeline and progress always produce the same state.
pub fn apply(timeline: &Timeline, progress: impl Into<Progress>) -> FrameState {
    let time = timeline.time_at(progress);
    let segments = timeline.segments();
    let mut state = FrameState::default();

    match timeline.overlap() {
        Overlap::LastRegistered => {
            for seg in segments {
                state.insert(&seg.target, &seg.property, seg.value_at(time));
            }
        }
        Overlap::LatestStarted => {
            let mut chosen: BTreeMap<(&TargetId, &Property), Choice> = BTreeMap::new();
            for (index, seg) in segments.iter().enumerate() {
                let started = seg.start <= time;
                chosen
                    .entry((&seg.target, &seg.property))
                    .and_modify(|c| {
                        let current = segments[c.index].start;
                        let replace = match (started, c.started) {
                            (true, false) => true,
                            // Equal starts go to the later registration.
                            (true, true) => seg.start >= current,
                            (false, false) => seg.start < current,
                            (false, true) => false,
                        };
                        if replace {
                            *c = Choice { index, started };
                        }
                    })
                    .or_insert(Choice { index, started });
            }
            for ((target, property), c) in chosen {
                state.insert(target, property, segments[c.index].value_at(time));
            }
        }
    }

    state
}

#[cfg(test)]
#[path = "../../tests/unit/eval/apply.rs"]
mod tests;
