use super::*;

#[test]
fn finish_pads_to_one_with_last_value() {
    let mut t = KeyTrack::new();
    t.push(0.0, 0.0);
    t.push(0.4, 10.0);
    let (kt, v) = t.finish();
    assert_eq!(kt, vec![0.0, 0.4, 1.0]);
    assert_eq!(v, vec![0.0, 10.0, 10.0]);
    assert!(is_well_formed(&kt));
}

#[test]
fn exact_duplicates_collapse_but_jumps_survive() {
    let mut t = KeyTrack::new();
    t.push(0.0, 0.0);
    t.push(0.0, 0.0);
    t.push(0.5, 1.0);
    t.push(0.5, 0.0);
    t.push(1.0, 0.0);
    let (kt, v) = t.finish();
    assert_eq!(kt, vec![0.0, 0.5, 0.5, 1.0]);
    assert_eq!(v, vec![0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn times_never_move_backwards_or_escape_unit_range() {
    let mut t = KeyTrack::new();
    t.push(0.0, 1);
    t.push(0.6, 2);
    t.push(0.599_999, 3);
    t.push(1.2, 4);
    let (kt, _) = t.finish();
    assert_eq!(kt, vec![0.0, 0.6, 0.6, 1.0]);
}

#[test]
fn fade_out_track_ramps_to_zero() {
    let o = OpacityTrack::fade_out(0.5, 0.8);
    assert_eq!(o.key_times, vec![0.0, 0.5, 0.8, 1.0]);
    assert_eq!(o.values, vec![1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn line_value_renders_path_and_tip() {
    let v = LineValue {
        x: 10.0,
        y: 25.0,
        width: 42.5,
    };
    assert_eq!(v.path_d(), "m10,25 h42.5");
    assert_eq!(v.tip_x(), 52.5);
}

#[test]
fn well_formedness_checks_bounds_and_order() {
    assert!(is_well_formed(&[0.0, 0.5, 0.5, 1.0]));
    assert!(!is_well_formed(&[0.1, 1.0]));
    assert!(!is_well_formed(&[0.0, 0.7, 0.6, 1.0]));
    assert!(!is_well_formed(&[0.0, 0.9]));
}
