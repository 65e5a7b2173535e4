use crate::{animation::ease::Ease, foundation::core::Progress};

/// Distance below which a smoothed value snaps onto its target.
const SETTLE_EPSILON: f64 = 1e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// How timeline progress follows scroll progress.
pub enum Scrub {
    /// Progress tracks the scroll position on every scroll event.
    #[default]
    Immediate,
    /// Progress chases the scroll position on frame ticks, settling in about `lag_secs`.
    Smooth { lag_secs: f64 },
}

/// Exponential follower used by [`Scrub::Smooth`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrubFollower {
    current: Option<f64>,
    target: f64,
}

impl ScrubFollower {
    pub fn set_target(&mut self, p: Progress) {
        self.target = p.get();
    }

    /// Jump straight to `p`.
    pub fn snap_to(&mut self, p: Progress) {
        self.target = p.get();
        self.current = Some(p.get());
    }

    pub fn current(&self) -> Option<Progress> {
        self.current.map(Progress::new)
    }

    pub fn is_settled(&self) -> bool {
        self.current == Some(self.target)
    }

    /// Advance by `dt_secs`; the gap shrinks by ~95% every `lag_secs`.
    pub fn advance(&mut self, lag_secs: f64, dt_secs: f64) -> Progress {
        let cur = match self.current {
            Some(c) if lag_secs > 0.0 => c,
            _ => self.target,
        };
        let k = 1.0 - (-3.0 * dt_secs / lag_secs.max(f64::MIN_POSITIVE)).exp();
        let mut next = cur + (self.target - cur) * k;
        if (self.target - next).abs() < SETTLE_EPSILON {
            next = self.target;
        }
        self.current = Some(next);
        Progress::new(next)
    }
}

/// Time-driven animation of timeline progress toward a fixed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTween {
    from: f64,
    to: f64,
    duration_secs: f64,
    ease: Ease,
    elapsed: f64,
}

impl ProgressTween {
    pub fn new(from: Progress, to: Progress, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from: from.get(),
            to: to.get(),
            duration_secs: if duration_secs.is_finite() {
                duration_secs.max(0.0)
            } else {
                0.0
            },
            ease,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> Progress {
        Progress::new(self.to)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration_secs
    }

    /// Advance by `dt_secs` and return the progress to show.
    pub fn advance(&mut self, dt_secs: f64) -> Progress {
        self.elapsed += dt_secs.max(0.0);
        if self.is_finished() {
            return Progress::new(self.to);
        }
        let w = self.ease.apply(self.elapsed / self.duration_secs);
        Progress::new(self.from + (self.to - self.from) * w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/motion.rs"]
mod tests;
