use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Ease,
    foundation::core::{Property, TargetId, Value},
    foundation::error::{ScrubError, ScrubResult},
    timeline::dsl::{DEFAULT_TWEEN_DURATION, TimelineBuilder, Tween},
    timeline::model::{Overlap, Timeline},
};

/// JSON-facing timeline description.
///
/// ```json
/// {
///   "defaults": { "ease": "power2.inOut" },
///   "labels": { "door": 0.6 },
///   "tweens": [
///     { "target": "door", "at": 0.6, "duration": 1, "to": { "scale": 1.6, "y": "-30px" } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
    #[serde(default)]
    pub overlap: Overlap,
    #[serde(default)]
    pub defaults: TweenDefaults,
    #[serde(default)]
    pub labels: BTreeMap<String, f64>,
    pub tweens: Vec<TweenDoc>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TweenDefaults {
    pub ease: Ease,
    pub duration: f64,
}

impl Default for TweenDefaults {
    fn default() -> Self {
        Self {
            ease: Ease::default(),
            duration: DEFAULT_TWEEN_DURATION,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TweenDoc {
    pub target: TargetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    pub to: BTreeMap<Property, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub from: BTreeMap<Property, Value>,
}

impl TimelineDoc {
    /// Parse a timeline document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrubResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrubError::serde(format!("parse timeline JSON: {e}")))
    }

    /// Parse a timeline document from a JSON string.
    pub fn from_json_str(s: &str) -> ScrubResult<Self> {
        serde_json::from_str(s).map_err(|e| ScrubError::serde(format!("parse timeline JSON: {e}")))
    }

    /// Parse a timeline document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrubResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrubError::validation(format!("open timeline JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Resolve and validate into a [`Timeline`].
    pub fn into_timeline(self) -> ScrubResult<Timeline> {
        let mut b = TimelineBuilder::new()
            .default_ease(self.defaults.ease)
            .overlap(self.overlap);
        if let Some(total) = self.total_duration {
            b = b.total_duration(total);
        }
        for (name, at) in self.labels {
            b = b.label(name, at)?;
        }

        for (i, doc) in self.tweens.into_iter().enumerate() {
            if doc.to.is_empty() {
                return Err(ScrubError::validation(format!(
                    "tween #{i} on '{}' animates no properties",
                    doc.target
                )));
            }
            if let Some(p) = doc.from.keys().find(|p| !doc.to.contains_key(p)) {
                return Err(ScrubError::validation(format!(
                    "tween #{i} on '{}' has a start value for '{p}' but no end value",
                    doc.target
                )));
            }

            let mut from = doc.from;
            let mut t =
                Tween::on(doc.target).duration(doc.duration.unwrap_or(self.defaults.duration));
            if let Some(at) = doc.at {
                t = t.at(at);
            }
            if let Some(ease) = doc.ease {
                t = t.ease(ease);
            }
            for (property, to) in doc.to {
                t = match from.remove(&property) {
                    Some(f) => t.from_to(property, f, to),
                    None => t.to(property, to),
                };
            }
            b = b.tween(t);
        }

        b.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/document.rs"]
mod tests;
