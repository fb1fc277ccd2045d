use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = VizConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, VizConfig::default());
    assert_eq!(cfg.timing(), TimingSpec::default());
    assert_eq!(cfg.layout().canvas.center_y(), 190.0);
}

#[test]
fn camel_case_keys_and_ease_names() {
    let cfg = VizConfig::from_json_str(
        r#"{
            "width": 800,
            "leftPad": 40,
            "rightPad": 60,
            "fontRange": [10, 40],
            "exitDurationMs": 0,
            "transitionDurationMs": 250,
            "enterEase": "linear",
            "updateEase": "quad-in-out"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.width, 800.0);
    assert_eq!(cfg.layout().left_pad, 40.0);
    assert_eq!(cfg.layout().right_pad, 60.0);
    let t = cfg.timing();
    assert_eq!(t.exit_duration, Millis::ZERO);
    assert_eq!(t.transition_duration, Millis(250));
    assert_eq!(t.enter_ease, Ease::Linear);
    assert_eq!(t.update_ease, Ease::QuadInOut);
    assert_eq!(t.exit_ease, Ease::CubicInOut);
}

#[test]
fn unknown_keys_and_bad_ease_are_rejected() {
    let err = VizConfig::from_json_str(r#"{"widht": 10}"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
    assert!(VizConfig::from_json_str(r#"{"enterEase": "bounce"}"#).is_err());
}

#[test]
fn validation_rules() {
    let bad = [
        VizConfig {
            width: 0.0,
            ..VizConfig::default()
        },
        VizConfig {
            height: f64::NAN,
            ..VizConfig::default()
        },
        VizConfig {
            left_pad: -1.0,
            ..VizConfig::default()
        },
        VizConfig {
            left_pad: 500.0,
            right_pad: 500.0,
            ..VizConfig::default()
        },
        VizConfig {
            font_range: [72.0, 24.0],
            ..VizConfig::default()
        },
        VizConfig {
            font_range: [0.0, 24.0],
            ..VizConfig::default()
        },
        VizConfig {
            min_font_size: 0.0,
            ..VizConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
    assert!(
        VizConfig {
            font_range: [30.0, 30.0],
            ..VizConfig::default()
        }
        .validate()
        .is_ok()
    );
}

#[test]
fn from_path_reports_missing_file() {
    let err = VizConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("not/here.json"));
}
