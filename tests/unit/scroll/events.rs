use super::*;

fn hub() -> ScrollHub {
    ScrollHub::new(ScrollMetrics {
        scroll_y: 0.0,
        viewport_height: 800.0,
    })
}

#[test]
fn listeners_receive_events_with_current_metrics() {
    let hub = hub();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    hub.subscribe(move |ev| sink.borrow_mut().push(*ev));

    hub.scroll_to(120.0);
    hub.resize(600.0);
    hub.tick(0.016);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].metrics().scroll_y, 120.0);
    assert!(matches!(seen[1], ScrollEvent::Resize(m) if m.viewport_height == 600.0));
    assert!(matches!(seen[2], ScrollEvent::Tick { dt_secs, .. } if dt_secs == 0.016));
}

#[test]
fn unsubscribe_is_idempotent() {
    let hub = hub();
    let id = hub.subscribe(|_| {});
    assert_eq!(hub.listener_count(), 1);
    assert!(hub.unsubscribe(id));
    assert!(!hub.unsubscribe(id));
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn listener_removed_mid_dispatch_is_not_called() {
    let hub = hub();
    let calls = Rc::new(RefCell::new(0));
    let victim: Rc<RefCell<Option<ListenerId>>> = Rc::new(RefCell::new(None));

    let h = hub.clone();
    let v = victim.clone();
    hub.subscribe(move |_| {
        if let Some(id) = *v.borrow() {
            h.unsubscribe(id);
        }
    });
    let c = calls.clone();
    let id = hub.subscribe(move |_| *c.borrow_mut() += 1);
    *victim.borrow_mut() = Some(id);

    hub.scroll_to(10.0);
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn reentrant_dispatch_does_not_panic() {
    let hub = hub();
    let count = Rc::new(RefCell::new(0));
    let h = hub.clone();
    let c = count.clone();
    hub.subscribe(move |ev| {
        *c.borrow_mut() += 1;
        if matches!(ev, ScrollEvent::Scroll(_)) {
            h.tick(0.01);
        }
    });
    hub.scroll_to(5.0);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn reduced_motion_flag_is_exposed() {
    assert!(!hub().prefers_reduced_motion());
    assert!(hub().with_reduced_motion(true).prefers_reduced_motion());
}
