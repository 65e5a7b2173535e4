use super::*;

const DOOR_DOC: &str = r#"
{
  "total_duration": 5,
  "overlap": "LatestStarted",
  "defaults": { "ease": "none" },
  "labels": { "door": 0.6 },
  "tweens": [
    { "target": "door", "at": 0.6, "duration": 1, "to": { "scale": 1.6, "y": "-30px" } },
    { "target": "door-overlay", "at": 1.3, "duration": 0.6,
      "to": { "opacity": 0, "pointerEvents": "none" } },
    { "target": "elevator-floors", "at": 4.0, "duration": 1, "ease": "power2.inOut",
      "from": { "y": "0%" }, "to": { "y": "-200%" } }
  ]
}
"#;

#[test]
fn parses_and_builds_a_timeline() {
    let tl = TimelineDoc::from_json_str(DOOR_DOC)
        .unwrap()
        .into_timeline()
        .unwrap();
    assert_eq!(tl.total_duration(), 5.0);
    assert_eq!(tl.overlap(), Overlap::LatestStarted);
    assert_eq!(tl.segments().len(), 5);
    assert_eq!(tl.label_progress("door").map(|p| p.get()), Some(0.6 / 5.0));

    let state = tl.apply(1.0);
    assert_eq!(state.get("door", &Property::Scale), Some(&Value::Number(1.6)));
    assert_eq!(state.get("door", &Property::Y), Some(&Value::px(-30.0)));
    assert_eq!(
        state.get("door-overlay", &Property::PointerEvents),
        Some(&Value::keyword("none"))
    );
    assert_eq!(
        state.get("elevator-floors", &Property::Y),
        Some(&Value::percent(-200.0))
    );
}

#[test]
fn per_tween_ease_overrides_defaults() {
    let tl = TimelineDoc::from_json_str(DOOR_DOC)
        .unwrap()
        .into_timeline()
        .unwrap();
    let floors = tl
        .segments()
        .iter()
        .find(|s| s.target.as_str() == "elevator-floors")
        .unwrap();
    assert_eq!(floors.ease, Ease::InOutCubic);
    assert_eq!(tl.segments()[0].ease, Ease::Linear);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TimelineDoc::from_json_str(r#"{ "tweens": [], "scrub": true }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn from_without_to_is_rejected() {
    let doc = TimelineDoc::from_json_str(
        r#"{ "tweens": [ { "target": "a", "to": { "x": "10px" }, "from": { "y": "0px" } } ] }"#,
    )
    .unwrap();
    assert!(doc.into_timeline().is_err());
}

#[test]
fn empty_tween_is_rejected() {
    let doc = TimelineDoc::from_json_str(r#"{ "tweens": [ { "target": "a", "to": {} } ] }"#)
        .unwrap();
    assert!(doc.into_timeline().is_err());
}

#[test]
fn invalid_durations_surface_as_invalid_segments() {
    let doc = TimelineDoc::from_json_str(
        r#"{ "tweens": [ { "target": "a", "duration": 0, "to": { "opacity": 0 } } ] }"#,
    )
    .unwrap();
    assert!(doc.into_timeline().unwrap_err().is_invalid_segment());
}

#[test]
fn missing_file_is_reported() {
    let err = TimelineDoc::from_path("target/does-not-exist/timeline.json").unwrap_err();
    assert!(err.to_string().contains("open timeline JSON"));
}
