/// Convenience result type used across scrubline.
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Top-level error taxonomy used by player APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrubError {
    /// A segment definition was rejected while building a timeline.
    #[error("invalid segment #{index}: {reason}")]
    InvalidSegment {
        /// Registration index of the offending segment.
        index: usize,
        /// Human-readable reason, including target and property.
        reason: String,
    },

    /// Invalid user-provided timeline or binding data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a style sink or scroll host while a binding is live.
    #[error("binding error: {0}")]
    Binding(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrubError {
    /// Build a [`ScrubError::InvalidSegment`] value.
    pub fn invalid_segment(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`ScrubError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrubError::Binding`] value.
    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding(msg.into())
    }

    /// Build a [`ScrubError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors produced by segment validation.
    pub fn is_invalid_segment(&self) -> bool {
        matches!(self, Self::InvalidSegment { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
