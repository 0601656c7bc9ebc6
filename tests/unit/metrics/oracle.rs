use super::*;

fn style() -> TextStyle {
    TextStyle {
        font_size: 20.0,
        letter_spacing: 0.0,
    }
}

#[test]
fn approx_uses_half_em_per_character() {
    assert_eq!(ApproxWidth.width("Hi", style()), 20.0);
    assert_eq!(ApproxWidth.width("", style()), 0.0);
}

#[test]
fn approx_widens_emoji() {
    let w = ApproxWidth.width("🚀", style());
    assert!((w - 14.0).abs() < 1e-9);
}

#[test]
fn approx_adds_letter_spacing_per_character() {
    let s = TextStyle {
        font_size: 10.0,
        letter_spacing: 2.0,
    };
    assert_eq!(ApproxWidth.width("abc", s), 21.0);
}

#[test]
fn char_count_uses_graphemes() {
    assert_eq!(char_count("abc"), 3);
    assert_eq!(char_count("e\u{301}"), 1);
    assert_eq!(char_count("👍🏽!"), 2);
}

#[test]
fn prefix_widths_cover_every_prefix() {
    let w = prefix_widths(&ApproxWidth, "abcd", style());
    assert_eq!(w, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn prefix_widths_respect_grapheme_boundaries() {
    let w = prefix_widths(&ApproxWidth, "a👍🏽", style());
    assert_eq!(w.len(), 3);
    assert_eq!(w[1], 10.0);
    assert!(w[2] > w[1]);
}

#[test]
fn prefix_widths_use_the_oracle_for_each_prefix() {
    struct Kerned;
    impl WidthOracle for Kerned {
        fn width(&self, text: &str, _style: TextStyle) -> f64 {
            // "AV" kerns tighter than the sum of its parts.
            if text == "AV" { 15.0 } else { 10.0 * text.len() as f64 }
        }
    }
    let w = prefix_widths(&Kerned, "AV", style());
    assert_eq!(w, vec![0.0, 10.0, 15.0]);
}
