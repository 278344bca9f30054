use super::*;

#[test]
fn defaults_validate() {
    let cfg = CoverflowConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.slide_count, 15);
    assert_eq!(cfg.get(Tunable::ProportionalGain), 5.0);
    assert_eq!(cfg.get(Tunable::RotationAmount), 70.0);
}

#[test]
fn defaults_sit_inside_panel_ranges() {
    let cfg = CoverflowConfig::default();
    for t in Tunable::ALL {
        let (lo, hi) = t.range();
        let v = cfg.get(t);
        assert!(lo <= v && v <= hi, "{t} = {v} outside [{lo}, {hi}]");
    }
}

#[test]
fn names_resolve_both_ways() {
    for t in Tunable::ALL {
        assert_eq!(Tunable::from_name(t.name()), Some(t));
        assert_eq!(Tunable::from_name(t.field_name()), Some(t));
    }
    assert_eq!("approachWide".parse::<Tunable>().unwrap(), Tunable::ApproachWidth);
    assert!("warp".parse::<Tunable>().is_err());
}

#[test]
fn set_clamps_into_panel_range() {
    let mut cfg = CoverflowConfig::default();
    assert_eq!(cfg.set(Tunable::MaxVelocity, 99.0).unwrap(), 30.0);
    assert_eq!(cfg.motion.max_velocity, 30.0);
    assert_eq!(cfg.set(Tunable::EdgeSlope, -3.0).unwrap(), 0.0);
    assert_eq!(cfg.set(Tunable::ZoomAmount, 1.25).unwrap(), 1.25);
    assert_eq!(cfg.shape.zoom_amount, 1.25);
}

#[test]
fn set_keeps_widths_positive() {
    let mut cfg = CoverflowConfig::default();
    for t in Tunable::ALL.into_iter().filter(|t| t.is_width()) {
        let stored = cfg.set(t, 0.0).unwrap();
        assert_eq!(stored, MIN_WIDTH);
    }
    cfg.validate().unwrap();
}

#[test]
fn set_rejects_non_finite() {
    let mut cfg = CoverflowConfig::default();
    assert!(cfg.set(Tunable::ProportionalGain, f64::NAN).is_err());
    assert!(cfg.set(Tunable::ProportionalGain, f64::INFINITY).is_err());
    assert_eq!(cfg.motion.proportional_gain, 5.0);
}

#[test]
fn validate_rejects_degenerate_documents() {
    let mut cfg = CoverflowConfig::default();
    cfg.shape.position_roughness = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = CoverflowConfig::default();
    cfg.motion.max_acceleration = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = CoverflowConfig::default();
    cfg.motion.approach_gain = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = CoverflowConfig::default();
    cfg.slide_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = CoverflowConfig::default();
    cfg.motion.target_index = 15;
    assert!(cfg.validate().is_err());
}

#[test]
fn shrinking_the_row_pulls_target_back() {
    let mut cfg = CoverflowConfig::default();
    cfg.select(12);
    cfg.set_slide_count(5).unwrap();
    assert_eq!(cfg.motion.target_index, 4);
    assert!(cfg.set_slide_count(0).is_err());
    assert_eq!(cfg.slide_count, 5);
}

#[test]
fn navigation_walks_the_row() {
    let mut cfg = CoverflowConfig::default();
    assert_eq!(cfg.navigate(Navigate::Prev), 0);
    assert_eq!(cfg.navigate(Navigate::Next), 1);
    assert_eq!(cfg.navigate(Navigate::Last), 14);
    assert_eq!(cfg.navigate(Navigate::Next), 14);
    assert_eq!(cfg.select(-4), 0);
}

#[test]
fn json_fills_missing_fields_from_defaults() {
    let cfg = CoverflowConfig::from_json_str(
        r#"{ "slide_count": 8, "motion": { "max_velocity": 4.0, "target_index": 7 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.slide_count, 8);
    assert_eq!(cfg.motion.max_velocity, 4.0);
    assert_eq!(cfg.motion.target_index, 7);
    assert_eq!(cfg.motion.proportional_gain, 5.0);
    assert_eq!(cfg.shape, FieldShapeParams::default());
}

#[test]
fn json_errors_are_classified() {
    let err = CoverflowConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, CoverflowError::Serde(_)));

    let err = CoverflowConfig::from_json_str(r#"{ "shape": { "zoom_area": 0.0 } }"#).unwrap_err();
    assert!(matches!(err, CoverflowError::Validation(_)));
}
