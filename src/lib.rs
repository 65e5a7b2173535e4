//! scrubline is a scroll-driven timeline player.
//!
//! A [`Timeline`] is a validated list of [`Segment`]s, each tweening one property of one
//! named target over a sub-range of a normalized axis. Scroll position inside a pinned
//! range is mapped to a progress value in `[0, 1]`, and [`apply`] turns that progress into
//! a deterministic [`FrameState`] (`target -> property -> value`).
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Vec<Segment>` / [`TimelineBuilder`] / [`TimelineDoc`] `-> Timeline`
//! 2. **Apply**: `Timeline + Progress -> FrameState` (pure)
//! 3. **Bind**: [`bind_to_scroll`] connects a timeline to a [`ScrollHub`] and a
//!    [`StyleSink`]; the returned [`ScrollBinding`] is the disposer
//!
//! The player is UI-agnostic. The host feeds scroll/resize/frame signals into the hub and
//! receives inline style writes through its sink. When the user prefers reduced motion,
//! nothing is bound.
#![forbid(unsafe_code)]

mod animation;
mod eval;
mod foundation;
mod scroll;
mod timeline;

/// Ready-made scenes built on the player.
pub mod scene;
/// Inline style rendering.
pub mod style;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use eval::apply::{FrameState, PropertyMap, apply};
pub use eval::fingerprint::{StateFingerprint, fingerprint_state};
pub use foundation::core::{Progress, Property, TargetId, Unit, Value, Vec2};
pub use foundation::error::{ScrubError, ScrubResult};
pub use scroll::binding::{BindOpts, BindingState, ScrollBinding, bind_to_scroll, dispose};
pub use scroll::events::{ListenerId, ScrollEvent, ScrollHub};
pub use scroll::motion::{ProgressTween, Scrub, ScrubFollower};
pub use scroll::sink::{InlineStyleSink, StyleSink};
pub use scroll::trigger::{PinLength, ScrollMetrics, TriggerRange};
pub use timeline::document::{TimelineDoc, TweenDefaults, TweenDoc};
pub use timeline::dsl::{DEFAULT_TWEEN_DURATION, TimelineBuilder, Tween};
pub use timeline::model::{Overlap, Timeline, TimelineOpts};
pub use timeline::segment::{Segment, SegmentDef};
