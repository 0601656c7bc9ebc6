use super::*;
use crate::metrics::oracle::ApproxWidth;

fn params(style: CursorStyle) -> GlobalParams {
    GlobalParams {
        cursor_style: style,
        ..GlobalParams::default()
    }
}

#[test]
fn names_resolve_with_straight_default() {
    assert_eq!(CursorStyle::from_name("block"), CursorStyle::Block);
    assert_eq!(CursorStyle::from_name("Underlined"), CursorStyle::Underlined);
    assert_eq!(CursorStyle::from_name("none"), CursorStyle::None);
    assert_eq!(CursorStyle::from_name("wavy"), CursorStyle::Straight);
}

#[test]
fn none_style_has_no_glyph() {
    assert!(CursorGlyph::resolve(&params(CursorStyle::None), &ApproxWidth).is_none());
}

#[test]
fn straight_is_a_thin_bar_centered_on_the_slot() {
    let g = CursorGlyph::resolve(&params(CursorStyle::Straight), &ApproxWidth).unwrap();
    assert_eq!(g.width, 2.0);
    assert_eq!(g.height, 20.0);
    assert_eq!(g.offset_y, -10.0);
}

#[test]
fn block_and_underline_span_one_cell() {
    let b = CursorGlyph::resolve(&params(CursorStyle::Block), &ApproxWidth).unwrap();
    assert_eq!(b.width, 10.0);
    assert_eq!(b.height, 20.0);

    let u = CursorGlyph::resolve(&params(CursorStyle::Underlined), &ApproxWidth).unwrap();
    assert_eq!(u.width, 10.0);
    assert_eq!(u.height, 2.0);
    assert_eq!(u.offset_y, 8.0);
}

#[test]
fn emoji_and_custom_carry_measured_text() {
    let e = CursorGlyph::resolve(&params(CursorStyle::Emoji), &ApproxWidth).unwrap();
    assert_eq!(e.text.as_deref(), Some(DEFAULT_EMOJI_CURSOR));
    assert!((e.width - 14.0).abs() < 1e-9);

    let mut p = params(CursorStyle::Custom);
    p.custom_cursor = Some("|>".to_owned());
    let c = CursorGlyph::resolve(&p, &ApproxWidth).unwrap();
    assert_eq!(c.text.as_deref(), Some("|>"));
    assert_eq!(c.width, 20.0);
}

#[test]
fn custom_without_text_falls_back_to_straight() {
    let g = CursorGlyph::resolve(&params(CursorStyle::Custom), &ApproxWidth).unwrap();
    assert_eq!(g.style, CursorStyle::Straight);
}
