use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::{
    animation::ease::Ease,
    eval::fingerprint::{StateFingerprint, fingerprint_state},
    foundation::core::{Progress, TargetId},
    foundation::error::{ScrubError, ScrubResult},
    scroll::events::{ListenerId, ScrollEvent, ScrollHub},
    scroll::motion::{ProgressTween, Scrub, ScrubFollower},
    scroll::sink::StyleSink,
    scroll::trigger::{ScrollMetrics, TriggerRange},
    timeline::model::Timeline,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Scroll binding options.
pub struct BindOpts {
    pub scrub: Scrub,
    /// Pin the viewport while the trigger range is active.
    pub pin: bool,
}

impl Default for BindOpts {
    fn default() -> Self {
        Self {
            scrub: Scrub::Immediate,
            pin: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Lifecycle of a [`ScrollBinding`].
pub enum BindingState {
    Bound,
    Disposed,
}

/// Live connection between a timeline, a scroll hub and a style sink.
///
/// Acts as the disposer: [`ScrollBinding::dispose`] (or dropping the binding)
/// removes the listener, releases the pin and reverts written styles.
pub struct ScrollBinding {
    live: Option<Live>,
}

struct Live {
    hub: ScrollHub,
    listener: ListenerId,
    driver: Rc<RefCell<Driver>>,
    /// Set when disposal happens while the driver is busy; the listener releases
    /// once its event is handled.
    release_pending: Rc<Cell<bool>>,
}

/// Bind `timeline` to scroll events from `hub`, writing styles into `sink`.
///
/// With reduced motion requested nothing is bound and the returned binding is
/// already disposed. Targets missing from `sink` are skipped.
#[tracing::instrument(skip_all, fields(segments = timeline.segments().len()))]
pub fn bind_to_scroll<S: StyleSink + 'static>(
    timeline: Rc<Timeline>,
    range: TriggerRange,
    hub: &ScrollHub,
    sink: Rc<RefCell<S>>,
    opts: BindOpts,
) -> ScrollBinding {
    if hub.prefers_reduced_motion() {
        tracing::info!("reduced motion requested; scroll timeline not bound");
        return ScrollBinding::disposed();
    }

    let sink: Rc<RefCell<dyn StyleSink>> = sink;
    let skipped: BTreeSet<TargetId> = match sink.try_borrow() {
        Ok(s) => timeline
            .targets()
            .into_iter()
            .filter(|t| !s.has_target(t))
            .cloned()
            .collect(),
        Err(_) => {
            tracing::warn!("style sink busy at bind time; scroll timeline not bound");
            return ScrollBinding::disposed();
        }
    };
    for t in &skipped {
        tracing::warn!(target_id = %t, "target missing at bind time; its segments are skipped");
    }

    let driver = Rc::new(RefCell::new(Driver {
        timeline,
        range,
        opts,
        sink,
        skipped,
        follower: ScrubFollower::default(),
        tween: None,
        last: None,
        written: BTreeSet::new(),
        pinned: false,
        usable: false,
        rendered: None,
    }));
    driver.borrow_mut().sync(&hub.metrics());

    let release_pending = Rc::new(Cell::new(false));
    let (d, pending) = (driver.clone(), release_pending.clone());
    let listener = hub.subscribe(move |ev| match d.try_borrow_mut() {
        Ok(mut drv) => {
            drv.handle(ev);
            if pending.take() {
                drv.release();
                tracing::debug!("deferred release after in-listener dispose");
            }
        }
        Err(_) => tracing::warn!("scroll binding busy; event dropped"),
    });
    tracing::debug!(?listener, "scroll timeline bound");

    ScrollBinding {
        live: Some(Live {
            hub: hub.clone(),
            listener,
            driver,
            release_pending,
        }),
    }
}

/// Dispose `binding`; idempotent.
pub fn dispose(binding: &mut ScrollBinding) {
    binding.dispose();
}

impl ScrollBinding {
    /// A binding that was never attached; disposing it does nothing.
    pub fn disposed() -> Self {
        Self { live: None }
    }

    pub fn state(&self) -> BindingState {
        if self.live.is_some() {
            BindingState::Bound
        } else {
            BindingState::Disposed
        }
    }

    pub fn is_bound(&self) -> bool {
        self.live.is_some()
    }

    /// Last progress written to the sink.
    pub fn progress(&self) -> Option<Progress> {
        self.with_driver(|d| d.rendered).flatten()
    }

    /// Jump to `progress` immediately, cancelling any progress tween.
    pub fn seek(&self, progress: impl Into<Progress>) {
        let p = progress.into();
        self.with_driver(|d| d.seek(p));
    }

    /// Animate to `progress` over `duration_secs`, advanced by hub ticks.
    pub fn tween_to(&self, progress: impl Into<Progress>, duration_secs: f64, ease: Ease) {
        let p = progress.into();
        self.with_driver(|d| d.tween_to(p, duration_secs, ease));
    }

    /// Animate to a timeline label and return its progress.
    ///
    /// Errors if the label is unknown or the binding is disposed.
    pub fn tween_to_label(
        &self,
        label: &str,
        duration_secs: f64,
        ease: Ease,
    ) -> ScrubResult<Progress> {
        let Some(live) = &self.live else {
            return Err(ScrubError::binding("scroll binding is disposed"));
        };
        let p = live
            .driver
            .try_borrow()
            .ok()
            .and_then(|d| d.timeline.label_progress(label))
            .ok_or_else(|| ScrubError::validation(format!("unknown timeline label '{label}'")))?;
        self.tween_to(p, duration_secs, ease);
        Ok(p)
    }

    /// Remove the listener, release the pin and revert styles. Idempotent.
    pub fn dispose(&mut self) {
        let Some(live) = self.live.take() else {
            return;
        };
        live.hub.unsubscribe(live.listener);
        match live.driver.try_borrow_mut() {
            Ok(mut d) => d.release(),
            // Disposed from inside the driver's own event; its listener releases on return.
            Err(_) => live.release_pending.set(true),
        }
        tracing::debug!(listener = ?live.listener, "scroll timeline disposed");
    }

    fn with_driver<R>(&self, f: impl FnOnce(&mut Driver) -> R) -> Option<R> {
        let live = self.live.as_ref()?;
        match live.driver.try_borrow_mut() {
            Ok(mut d) => Some(f(&mut d)),
            Err(_) => {
                tracing::warn!("scroll binding busy; call ignored");
                None
            }
        }
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for ScrollBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollBinding")
            .field("state", &self.state())
            .finish()
    }
}

struct Driver {
    timeline: Rc<Timeline>,
    range: TriggerRange,
    opts: BindOpts,
    sink: Rc<RefCell<dyn StyleSink>>,
    skipped: BTreeSet<TargetId>,
    follower: ScrubFollower,
    tween: Option<ProgressTween>,
    last: Option<StateFingerprint>,
    written: BTreeSet<TargetId>,
    pinned: bool,
    /// Whether the last reported metrics could drive the timeline.
    usable: bool,
    rendered: Option<Progress>,
}

impl Driver {
    fn handle(&mut self, ev: &ScrollEvent) {
        match ev {
            ScrollEvent::Scroll(m) => {
                if self.tween.take().is_some() {
                    tracing::debug!("scroll cancelled progress tween");
                }
                self.sync(m);
            }
            ScrollEvent::Resize(m) => self.sync(m),
            ScrollEvent::Tick { dt_secs, .. } => self.tick(*dt_secs),
        }
    }

    /// Recompute progress and pinning from fresh metrics.
    fn sync(&mut self, m: &ScrollMetrics) {
        let Some(p) = self.range.progress(m) else {
            tracing::debug!(?m, "scroll container unavailable; leaving targets untouched");
            self.usable = false;
            return;
        };
        self.usable = true;
        if self.opts.pin {
            self.set_pinned(self.range.is_pinned(m));
        }
        if self.tween.is_some() {
            self.follower.set_target(p);
            return;
        }
        match self.opts.scrub {
            Scrub::Smooth { .. } if self.follower.current().is_some() => {
                self.follower.set_target(p);
            }
            _ => {
                self.follower.snap_to(p);
                self.render(p);
            }
        }
    }

    fn tick(&mut self, dt_secs: f64) {
        if !self.usable || !dt_secs.is_finite() || dt_secs < 0.0 {
            return;
        }
        if let Some(tween) = self.tween.as_mut() {
            let p = tween.advance(dt_secs);
            if tween.is_finished() {
                self.tween = None;
            }
            self.follower.snap_to(p);
            self.render(p);
            return;
        }
        if let Scrub::Smooth { lag_secs } = self.opts.scrub
            && !self.follower.is_settled()
        {
            let p = self.follower.advance(lag_secs, dt_secs);
            self.render(p);
        }
    }

    fn seek(&mut self, p: Progress) {
        self.tween = None;
        self.follower.snap_to(p);
        self.render(p);
    }

    fn tween_to(&mut self, p: Progress, duration_secs: f64, ease: Ease) {
        let from = self.rendered.unwrap_or(Progress::START);
        self.tween = Some(ProgressTween::new(from, p, duration_secs, ease));
    }

    fn render(&mut self, p: Progress) {
        if !self.usable {
            tracing::debug!("scroll container unavailable; render skipped");
            return;
        }
        let mut state = self.timeline.apply(p);
        state.retain_targets(|t| !self.skipped.contains(t));
        self.rendered = Some(p);

        let fp = fingerprint_state(&state);
        if self.last == Some(fp) {
            return;
        }
        match self.write(&state) {
            Ok(()) => self.last = Some(fp),
            Err(e) => {
                tracing::warn!(error = %e, "style write failed; reverting targets to rest");
                self.revert_all();
            }
        }
    }

    fn write(&mut self, state: &crate::eval::apply::FrameState) -> ScrubResult<()> {
        let mut sink = self
            .sink
            .try_borrow_mut()
            .map_err(|_| ScrubError::binding("style sink is busy"))?;
        for (target, props) in state.iter() {
            self.written.insert(target.clone());
            for (property, value) in props {
                sink.set_property(target, property, value)?;
            }
        }
        Ok(())
    }

    fn revert_all(&mut self) {
        self.last = None;
        let Ok(mut sink) = self.sink.try_borrow_mut() else {
            tracing::warn!("style sink busy; targets not reverted");
            return;
        };
        for t in std::mem::take(&mut self.written) {
            sink.revert(&t);
        }
    }

    fn set_pinned(&mut self, pinned: bool) {
        if pinned == self.pinned {
            return;
        }
        match self.sink.try_borrow_mut() {
            Ok(mut sink) => {
                sink.set_pinned(pinned);
                self.pinned = pinned;
                tracing::debug!(pinned, "viewport pin changed");
            }
            Err(_) => tracing::warn!("style sink busy; pin unchanged"),
        }
    }

    fn release(&mut self) {
        self.tween = None;
        self.revert_all();
        self.set_pinned(false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/binding.rs"]
mod tests;
