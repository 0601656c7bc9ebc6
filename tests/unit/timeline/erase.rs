use super::*;
use crate::metrics::oracle::{ApproxWidth, TextStyle};

fn line(text: &str) -> Line {
    Line::measure(
        text,
        0,
        &ApproxWidth,
        TextStyle {
            font_size: 20.0,
            letter_spacing: 0.0,
        },
    )
}

#[test]
fn names_resolve_with_line_default() {
    assert_eq!(EraseStrategy::from_name("none"), EraseStrategy::None);
    assert_eq!(EraseStrategy::from_name(" FADE "), EraseStrategy::Fade);
    assert_eq!(EraseStrategy::from_name("line"), EraseStrategy::Line);
    assert_eq!(EraseStrategy::from_name("bogus"), EraseStrategy::Line);
    assert_eq!(EraseStrategy::from_name(""), EraseStrategy::Line);
}

#[test]
fn serde_roundtrips_through_names() {
    let s: EraseStrategy = serde_json::from_str("\"fade\"").unwrap();
    assert_eq!(s, EraseStrategy::Fade);
    assert_eq!(serde_json::to_string(&EraseStrategy::None).unwrap(), "\"none\"");
}

#[test]
fn line_erase_removes_one_character_per_step() {
    let l = line("abcd");
    let w = EraseWindow {
        line: &l,
        start: 0.2,
        end: 0.6,
    };
    let seg = EraseStrategy::Line.replacing(&w);
    assert!(!seg.use_fade);
    assert_eq!(seg.key_times.len(), 1 + 4);
    assert_eq!(seg.values, vec![40.0, 30.0, 20.0, 10.0, 0.0]);
    assert_eq!(seg.key_times[0], 0.2);
    assert!((seg.key_times[2] - 0.4).abs() < 1e-12);
    assert!((seg.key_times[4] - 0.6).abs() < 1e-12);
}

#[test]
fn line_erase_widths_are_non_increasing_and_end_at_zero() {
    let l = line("a🚀b c");
    let w = EraseWindow {
        line: &l,
        start: 0.5,
        end: 0.9,
    };
    let seg = EraseStrategy::Line.stacked(&w);
    assert!(seg.values.windows(2).all(|p| p[0] >= p[1]));
    assert_eq!(seg.values.last(), Some(&0.0));
    assert!(seg.key_times.windows(2).all(|p| p[0] < p[1]));
}

#[test]
fn fade_keeps_width_and_reports_window() {
    let l = line("abc");
    let w = EraseWindow {
        line: &l,
        start: 0.3,
        end: 0.7,
    };
    let seg = EraseStrategy::Fade.replacing(&w);
    assert!(seg.use_fade);
    assert_eq!((seg.fade_start, seg.fade_end), (0.3, 0.7));
    assert_eq!(seg.key_times, vec![0.3, 0.7]);
    assert_eq!(seg.values, vec![30.0, 30.0]);
}

#[test]
fn none_holds_when_replacing() {
    let l = line("abc");
    let w = EraseWindow {
        line: &l,
        start: 0.5,
        end: 0.5,
    };
    assert!(EraseStrategy::None.replacing(&w).is_empty());
    assert!(EraseStrategy::None.single(&w).is_empty());
}

#[test]
fn none_cuts_near_the_end_when_stacked() {
    let l = line("abc");
    let w = EraseWindow {
        line: &l,
        start: 0.4,
        end: 1.0,
    };
    let seg = EraseStrategy::None.stacked(&w);
    assert_eq!(seg.key_times, vec![NONE_CUT_AT, 1.0]);
    assert_eq!(seg.values, vec![30.0, 0.0]);
}

#[test]
fn none_cut_never_precedes_typing_end() {
    let l = line("abc");
    let w = EraseWindow {
        line: &l,
        start: 0.995,
        end: 1.0,
    };
    let seg = EraseStrategy::None.stacked(&w);
    assert_eq!(seg.key_times, vec![0.995, 1.0]);
    let keys: Vec<_> = seg.keys().collect();
    assert_eq!(keys, vec![(0.995, 30.0), (1.0, 0.0)]);
}
