use std::cell::RefCell;
use std::rc::Rc;

use crate::scroll::trigger::ScrollMetrics;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Event dispatched to scroll listeners.
pub enum ScrollEvent {
    /// The document scrolled.
    Scroll(ScrollMetrics),
    /// The viewport changed size.
    Resize(ScrollMetrics),
    /// One animation frame elapsed.
    Tick {
        dt_secs: f64,
        metrics: ScrollMetrics,
    },
}

impl ScrollEvent {
    pub fn metrics(&self) -> &ScrollMetrics {
        match self {
            Self::Scroll(m) | Self::Resize(m) => m,
            Self::Tick { metrics, .. } => metrics,
        }
    }
}

/// Handle returned by [`ScrollHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Rc<RefCell<dyn FnMut(&ScrollEvent)>>;

struct HubState {
    metrics: ScrollMetrics,
    reduced_motion: bool,
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Single-threaded scroll environment: the host feeds scroll, resize and frame
/// signals in, listeners are called synchronously.
///
/// Cloning yields another handle to the same hub.
#[derive(Clone)]
pub struct ScrollHub {
    state: Rc<RefCell<HubState>>,
}

impl ScrollHub {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState {
                metrics,
                reduced_motion: false,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Set the user's reduced-motion preference.
    pub fn with_reduced_motion(self, reduced: bool) -> Self {
        self.state.borrow_mut().reduced_motion = reduced;
        self
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.state.borrow().reduced_motion
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.state.borrow().metrics
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn subscribe(&self, listener: impl FnMut(&ScrollEvent) + 'static) -> ListenerId {
        let mut st = self.state.borrow_mut();
        let id = ListenerId(st.next_id);
        st.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        st.listeners.push((id, listener));
        id
    }

    /// Remove a listener; returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut st = self.state.borrow_mut();
        let before = st.listeners.len();
        st.listeners.retain(|(lid, _)| *lid != id);
        st.listeners.len() != before
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        let metrics = {
            let mut st = self.state.borrow_mut();
            st.metrics.scroll_y = scroll_y;
            st.metrics
        };
        self.dispatch(ScrollEvent::Scroll(metrics));
    }

    pub fn resize(&self, viewport_height: f64) {
        let metrics = {
            let mut st = self.state.borrow_mut();
            st.metrics.viewport_height = viewport_height;
            st.metrics
        };
        self.dispatch(ScrollEvent::Resize(metrics));
    }

    pub fn tick(&self, dt_secs: f64) {
        let metrics = self.metrics();
        self.dispatch(ScrollEvent::Tick { dt_secs, metrics });
    }

    fn dispatch(&self, event: ScrollEvent) {
        let snapshot: Vec<(ListenerId, Listener)> = self.state.borrow().listeners.clone();
        for (id, listener) in snapshot {
            // Listeners removed by an earlier listener in this dispatch are skipped.
            let live = self
                .state
                .borrow()
                .listeners
                .iter()
                .any(|(lid, _)| *lid == id);
            if !live {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(&event),
                Err(_) => tracing::warn!(?id, "re-entrant scroll event dropped"),
            };
        }
    }
}

impl std::fmt::Debug for ScrollHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("ScrollHub")
            .field("metrics", &st.metrics)
            .field("reduced_motion", &st.reduced_motion)
            .field("listeners", &st.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/events.rs"]
mod tests;
