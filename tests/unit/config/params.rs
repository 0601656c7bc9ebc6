use super::*;

#[test]
fn defaults_validate() {
    GlobalParams::default().validate().unwrap();
}

#[test]
fn non_positive_rates_are_rejected() {
    let p = GlobalParams {
        print_rate: 0.0,
        ..GlobalParams::default()
    };
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("print_rate"));

    let p = GlobalParams {
        erase_rate: -3.0,
        ..GlobalParams::default()
    };
    assert!(p.validate().unwrap_err().to_string().contains("erase_rate"));
}

#[test]
fn negative_pauses_are_rejected() {
    let p = GlobalParams {
        post_erase_pause_ms: -1.0,
        ..GlobalParams::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn custom_cursor_requires_glyph() {
    let mut p = GlobalParams {
        cursor_style: CursorStyle::Custom,
        ..GlobalParams::default()
    };
    assert!(p.validate().is_err());
    p.custom_cursor = Some("▌".to_owned());
    p.validate().unwrap();
}

#[test]
fn unknown_strategy_names_fall_back_when_parsing() {
    let p: GlobalParams =
        serde_json::from_str(r#"{"erase_strategy": "bogus", "cursor_style": "sparkles"}"#)
            .unwrap();
    assert_eq!(p.erase_strategy, EraseStrategy::Line);
    assert_eq!(p.cursor_style, CursorStyle::Straight);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let p: GlobalParams =
        serde_json::from_str(r#"{"repeat": false, "geometry": {"font_size": 32}}"#).unwrap();
    assert!(!p.repeat);
    assert_eq!(p.print_rate, 10.0);
    assert_eq!(p.geometry.font_size, 32.0);
    assert_eq!(p.geometry.width, 435.0);
}
