use super::*;

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(FaceConfig::from_json_str("{}").unwrap(), FaceConfig::default());
}

#[test]
fn defaults_round_trip_through_json() {
    let json = FaceConfig::default().to_json_string().unwrap();
    assert!(json.contains("\"tick_color\": \"#FC0204\""));
    assert_eq!(FaceConfig::from_json_str(&json).unwrap(), FaceConfig::default());
}

#[test]
fn partial_config_keeps_other_defaults() {
    let cfg = FaceConfig::from_json_str(
        r##"{ "show_hours_text": false, "background": "#102030" }"##,
    )
    .unwrap();
    assert!(!cfg.show_hours_text);
    assert!(cfg.show_minute_ticks);
    assert_eq!(cfg.background, Color::rgb(0x10, 0x20, 0x30));
    assert_eq!(cfg.interactive_interval_ms, 25);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = FaceConfig::from_json_str(r#"{ "show_date": true }"#).unwrap_err();
    assert!(matches!(err, ClockfaceError::Config(_)));
    assert!(err.to_string().contains("show_date"));
}

#[test]
fn bad_color_and_zero_interval_are_config_errors() {
    assert!(matches!(
        FaceConfig::from_json_str(r#"{ "tick_color": "red" }"#),
        Err(ClockfaceError::Config(_))
    ));
    assert!(matches!(
        FaceConfig::from_json_str(r#"{ "interactive_interval_ms": 0 }"#),
        Err(ClockfaceError::Config(_))
    ));
}

#[test]
fn rainbow_starts_with_the_tick_color() {
    assert_eq!(RAINBOW[0], FaceConfig::default().tick_color);
}
