use super::*;
use crate::{
    foundation::core::Progress, scroll::sink::InlineStyleSink, scroll::trigger::ScrollMetrics,
};

fn number(v: Option<&Value>) -> f64 {
    match v {
        Some(Value::Number(n)) => *n,
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn timeline_spans_all_scenes() {
    let tl = building_timeline().unwrap();
    assert!((tl.total_duration() - 5.2).abs() < 1e-12);
    assert_eq!(tl.segments().len(), 11);
    assert_eq!(tl.targets().len(), TARGETS.len());
    assert!(tl.segments().iter().all(|s| s.ease == Ease::InOutCubic));
}

#[test]
fn start_shows_the_exterior_at_rest() {
    let state = building_timeline().unwrap().apply(0.0);
    assert_eq!(number(state.get(STAGE, &Property::Scale)), 1.0);
    assert_eq!(state.get(STAGE, &Property::Y), Some(&Value::px(0.0)));
    assert_eq!(state.get(STAGE, &Property::X), Some(&Value::px(0.0)));
    assert_eq!(number(state.get(DOOR_OVERLAY, &Property::Opacity)), 1.0);
    assert_eq!(
        state.get(DOOR_OVERLAY, &Property::PointerEvents),
        Some(&Value::keyword("auto"))
    );
    assert_eq!(
        state.get(ELEVATOR_FLOORS, &Property::Y),
        Some(&Value::percent(0.0))
    );
}

#[test]
fn end_shows_the_elevator() {
    let state = building_timeline().unwrap().apply(1.0);
    assert_eq!(number(state.get(STAGE, &Property::Scale)), 1.05);
    assert_eq!(state.get(STAGE, &Property::Y), Some(&Value::px(-320.0)));
    assert_eq!(state.get(STAGE, &Property::X), Some(&Value::px(-220.0)));
    assert_eq!(number(state.get(DOOR, &Property::Scale)), 1.6);
    assert_eq!(
        state.get(DOOR_OVERLAY, &Property::PointerEvents),
        Some(&Value::keyword("none"))
    );
    assert_eq!(
        state.get(ELEVATOR_FLOORS, &Property::Y),
        Some(&Value::percent(-200.0))
    );
}

#[test]
fn stage_scale_hands_over_between_scenes() {
    let tl = building_timeline().unwrap();
    // Between the exterior zoom and the corridor move the stage holds 1.08.
    let p = tl.progress_at(1.5);
    assert_eq!(number(tl.apply(p).get(STAGE, &Property::Scale)), 1.08);
    // Between corridor and elevator it holds 1.02.
    let p = tl.progress_at(3.2);
    assert_eq!(number(tl.apply(p).get(STAGE, &Property::Scale)), 1.02);
}

#[test]
fn labels_mark_scene_starts() {
    let tl = building_timeline().unwrap();
    let corridor = tl.label_progress("corridor").unwrap();
    assert!((corridor.get() - 1.9 / 5.2).abs() < 1e-12);
    assert_eq!(tl.label_progress("exterior"), Some(Progress::START));
}

#[test]
fn hotspots_cover_projects_and_floors() {
    let scene = BuildingScene::new(0.0).unwrap();
    let ids: Vec<&str> = scene.hotspots().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "project-1",
            "project-2",
            "floor-contact",
            "floor-about",
            "floor-projects"
        ]
    );
    assert_eq!(
        scene.hotspot("floor-about").unwrap().action,
        HotspotAction::TweenToProgress {
            progress: 0.65,
            duration_secs: FLOOR_TWEEN_SECS
        }
    );
    assert!(scene.hotspots().iter().all(|h| !h.label.is_empty()));
}

#[test]
fn pinned_range_is_five_viewports() {
    let scene = BuildingScene::new(40.0).unwrap();
    let metrics = ScrollMetrics {
        scroll_y: 0.0,
        viewport_height: 900.0,
    };
    assert_eq!(scene.range().bounds(&metrics), Some((40.0, 40.0 + 4500.0)));
}

#[test]
fn mount_renders_and_settles_with_smooth_scrub() {
    let scene = BuildingScene::new(0.0).unwrap();
    let hub = ScrollHub::new(ScrollMetrics {
        scroll_y: 0.0,
        viewport_height: 800.0,
    });
    let sink = Rc::new(RefCell::new(InlineStyleSink::new(TARGETS)));
    let binding = scene.mount(&hub, sink.clone());
    assert!(binding.is_bound());
    assert!(sink.borrow().is_pinned());
    assert_eq!(
        sink.borrow().inline_style(STAGE).unwrap(),
        "transform: translate(0px, 0px) scale(1)"
    );

    hub.scroll_to(4000.0);
    for _ in 0..120 {
        hub.tick(1.0 / 60.0);
    }
    assert_eq!(
        sink.borrow().inline_style(STAGE).unwrap(),
        "transform: translate(-220px, -320px) scale(1.05)"
    );
    assert_eq!(
        sink.borrow().inline_style(DOOR_OVERLAY).unwrap(),
        "opacity: 0; pointer-events: none"
    );
}
