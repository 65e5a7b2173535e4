use super::*;
use crate::foundation::core::Property;

fn to_def(target: &str, property: Property, to: Value, start: f64, duration: f64) -> SegmentDef {
    SegmentDef {
        target: target.into(),
        property,
        from: None,
        to,
        start,
        duration,
        ease: None,
    }
}

#[test]
fn build_rejects_invalid_segments_with_their_index() {
    let segs = vec![
        Segment::new("stage", Property::Scale, 1.0, 1.08, 0.0, 1.0),
        Segment::new("door", Property::Scale, 1.0, 1.6, 0.6, 0.0),
    ];
    let err = Timeline::build(segs).unwrap_err();
    match err {
        ScrubError::InvalidSegment { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("duration"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn total_duration_defaults_to_latest_end() {
    let tl = Timeline::build(vec![
        Segment::new("a", Property::Opacity, 1.0, 0.0, 0.0, 1.0),
        Segment::new("b", Property::Opacity, 1.0, 0.0, 4.0, 1.0),
    ])
    .unwrap();
    assert_eq!(tl.total_duration(), 5.0);
    assert_eq!(tl.targets().len(), 2);
}

#[test]
fn empty_timeline_has_zero_duration() {
    let tl = Timeline::build(vec![]).unwrap();
    assert_eq!(tl.total_duration(), 0.0);
    assert_eq!(tl.progress_at(3.0), Progress::START);
    assert!(tl.apply(0.5).is_empty());
}

#[test]
fn explicit_total_duration_must_be_positive() {
    let opts = TimelineOpts {
        total_duration: Some(0.0),
        ..TimelineOpts::default()
    };
    assert!(Timeline::build_with(vec![], opts).is_err());
}

#[test]
fn segments_may_overrun_explicit_total() {
    let opts = TimelineOpts {
        total_duration: Some(2.0),
        ..TimelineOpts::default()
    };
    let tl = Timeline::build_with(
        vec![Segment::new("a", Property::X, Value::px(0.0), Value::px(10.0), 1.0, 4.0)],
        opts,
    )
    .unwrap();
    assert_eq!(tl.total_duration(), 2.0);
}

#[test]
fn omitted_from_chains_off_earlier_segments() {
    let tl = Timeline::from_defs(
        vec![
            to_def("stage", Property::Scale, Value::Number(1.08), 0.0, 1.0),
            to_def("stage", Property::Scale, Value::Number(1.02), 1.9, 1.2),
            to_def("stage", Property::Scale, Value::Number(1.05), 3.4, 1.0),
        ],
        TimelineOpts::default(),
    )
    .unwrap();
    let froms: Vec<_> = tl.segments().iter().map(|s| s.from.clone()).collect();
    assert_eq!(
        froms,
        vec![Value::Number(1.0), Value::Number(1.08), Value::Number(1.02)]
    );
}

#[test]
fn omitted_from_uses_rest_value_with_target_unit() {
    let tl = Timeline::from_defs(
        vec![to_def(
            "elevator-floors",
            Property::Y,
            Value::percent(-200.0),
            4.2,
            1.0,
        )],
        TimelineOpts::default(),
    )
    .unwrap();
    assert_eq!(tl.segments()[0].from, Value::percent(0.0));
}

#[test]
fn custom_property_without_from_is_invalid() {
    let err = Timeline::from_defs(
        vec![to_def(
            "stage",
            Property::Custom("filter".into()),
            Value::keyword("blur(4px)"),
            0.0,
            1.0,
        )],
        TimelineOpts::default(),
    )
    .unwrap_err();
    assert!(err.is_invalid_segment());
}

#[test]
fn default_ease_applies_to_unspecified_segments() {
    let opts = TimelineOpts {
        default_ease: Ease::InOutCubic,
        ..TimelineOpts::default()
    };
    let mut explicit = to_def("a", Property::Opacity, Value::Number(0.0), 0.0, 1.0);
    explicit.ease = Some(Ease::Linear);
    let tl = Timeline::from_defs(
        vec![
            to_def("b", Property::Opacity, Value::Number(0.0), 0.0, 1.0),
            explicit,
        ],
        opts,
    )
    .unwrap();
    assert_eq!(tl.segments()[0].ease, Ease::InOutCubic);
    assert_eq!(tl.segments()[1].ease, Ease::Linear);
}

#[test]
fn labels_map_to_progress() {
    let mut labels = BTreeMap::new();
    labels.insert("corridor".to_string(), 2.5);
    let opts = TimelineOpts {
        total_duration: Some(5.0),
        labels,
        ..TimelineOpts::default()
    };
    let tl = Timeline::build_with(vec![], opts).unwrap();
    assert_eq!(tl.label_progress("corridor"), Some(Progress::new(0.5)));
    assert_eq!(tl.label_progress("missing"), None);
}

#[test]
fn labels_must_be_non_negative() {
    let mut labels = BTreeMap::new();
    labels.insert("bad".to_string(), -1.0);
    let opts = TimelineOpts {
        labels,
        ..TimelineOpts::default()
    };
    assert!(Timeline::build_with(vec![], opts).is_err());
}
