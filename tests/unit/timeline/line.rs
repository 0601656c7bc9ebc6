use super::*;
use crate::metrics::oracle::ApproxWidth;

fn style() -> TextStyle {
    TextStyle {
        font_size: 20.0,
        letter_spacing: 0.0,
    }
}

#[test]
fn measure_derives_count_and_width() {
    let l = Line::measure("Hello", 3, &ApproxWidth, style());
    assert_eq!(l.char_count, 5);
    assert_eq!(l.width, 50.0);
    assert_eq!(l.source_index, 3);
}

#[test]
fn width_after_erasing_walks_down_to_zero() {
    let l = Line::measure("abc", 0, &ApproxWidth, style());
    let widths: Vec<f64> = (0..=3).map(|k| l.width_after_erasing(k)).collect();
    assert_eq!(widths, vec![30.0, 20.0, 10.0, 0.0]);
    assert_eq!(l.width_after_erasing(10), 0.0);
}

#[test]
fn collect_drops_empty_lines_but_keeps_indices() {
    let texts = vec![
        "one".to_owned(),
        String::new(),
        "three".to_owned(),
    ];
    let lines = collect_lines(&texts, &ApproxWidth, style());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].source_index, 0);
    assert_eq!(lines[1].source_index, 2);
}
