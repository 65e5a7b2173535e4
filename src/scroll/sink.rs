use std::collections::{BTreeMap, BTreeSet};

use crate::{
    eval::apply::PropertyMap,
    foundation::core::{Property, TargetId, Value},
    foundation::error::{ScrubError, ScrubResult},
    style::css,
};

/// Receiver of the style mutations a binding produces.
///
/// Implemented by the host page (or a test double). Target handles are resolved by
/// the sink; the player never holds element references itself.
pub trait StyleSink {
    /// Whether `target` exists in the host document.
    fn has_target(&self, target: &TargetId) -> bool;

    /// Write one inline property.
    fn set_property(
        &mut self,
        target: &TargetId,
        property: &Property,
        value: &Value,
    ) -> ScrubResult<()>;

    /// Remove every inline property the player wrote on `target`.
    fn revert(&mut self, target: &TargetId);

    /// Hold or release the viewport.
    fn set_pinned(&mut self, pinned: bool);
}

/// In-memory sink that records inline styles per target.
#[derive(Clone, Debug, Default)]
pub struct InlineStyleSink {
    known: BTreeSet<TargetId>,
    styles: BTreeMap<TargetId, PropertyMap>,
    pinned: bool,
    writes: usize,
}

impl InlineStyleSink {
    /// Create a sink whose document contains `targets`.
    pub fn new<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetId>,
    {
        Self {
            known: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn value(&self, target: &str, property: &Property) -> Option<&Value> {
        self.styles
            .get(&TargetId::from(target))
            .and_then(|p| p.get(property))
    }

    /// Current inline `style` attribute of `target`, if anything was written.
    pub fn inline_style(&self, target: &str) -> Option<String> {
        self.styles
            .get(&TargetId::from(target))
            .filter(|p| !p.is_empty())
            .map(css::inline_style)
    }

    /// True when no inline styles are present.
    pub fn is_at_rest(&self) -> bool {
        self.styles.values().all(|p| p.is_empty())
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Number of property writes received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleSink for InlineStyleSink {
    fn has_target(&self, target: &TargetId) -> bool {
        self.known.contains(target)
    }

    fn set_property(
        &mut self,
        target: &TargetId,
        property: &Property,
        value: &Value,
    ) -> ScrubResult<()> {
        if !self.known.contains(target) {
            return Err(ScrubError::binding(format!("no element for target '{target}'")));
        }
        self.styles
            .entry(target.clone())
            .or_default()
            .insert(property.clone(), value.clone());
        self.writes += 1;
        Ok(())
    }

    fn revert(&mut self, target: &TargetId) {
        self.styles.remove(target);
    }

    fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sink.rs"]
mod tests;
