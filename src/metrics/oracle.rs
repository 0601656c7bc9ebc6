use unicode_segmentation::UnicodeSegmentation as _;

/// Approximate advance of one ordinary character, as a fraction of the font size.
pub const APPROX_CHAR_EM: f64 = 0.5;
/// Widening factor applied to emoji-class characters by the approximation.
pub const APPROX_EMOJI_FACTOR: f64 = 1.4;

/// Style inputs that influence measured width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in px.
    pub font_size: f64,
    /// Extra advance after every character, px.
    pub letter_spacing: f64,
}

/// Character-width lookup capability consumed by timeline synthesis.
///
/// Implementations must be deterministic: the same text and style always measure the same.
pub trait WidthOracle {
    /// Rendered width of `text` in px.
    fn width(&self, text: &str, style: TextStyle) -> f64;
}

/// Fixed-width approximation used when no font metrics are available.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxWidth;

impl WidthOracle for ApproxWidth {
    fn width(&self, text: &str, style: TextStyle) -> f64 {
        text.graphemes(true)
            .map(|g| {
                let em = if is_emoji_class(g) {
                    APPROX_CHAR_EM * APPROX_EMOJI_FACTOR
                } else {
                    APPROX_CHAR_EM
                };
                style.font_size * em + style.letter_spacing
            })
            .sum()
    }
}

/// Number of user-perceived characters (extended grapheme clusters) in `text`.
pub fn char_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offsets where each grapheme prefix ends: `[0, end(g0), end(g1), ..., text.len()]`.
pub(crate) fn prefix_ends(text: &str) -> Vec<usize> {
    let mut ends = Vec::with_capacity(text.len() + 1);
    ends.push(0);
    ends.extend(text.grapheme_indices(true).map(|(i, g)| i + g.len()));
    ends
}

/// Width of every grapheme prefix of `text`, from the empty prefix to the full text.
///
/// Each prefix is measured as a whole so kerning and styled spans are honored.
pub fn prefix_widths(oracle: &dyn WidthOracle, text: &str, style: TextStyle) -> Vec<f64> {
    prefix_ends(text)
        .into_iter()
        .map(|end| {
            if end == 0 {
                0.0
            } else {
                oracle.width(&text[..end], style).max(0.0)
            }
        })
        .collect()
}

/// Whether a grapheme renders as a (usually wide) emoji glyph.
pub fn is_emoji_class(grapheme: &str) -> bool {
    grapheme.chars().any(|c| {
        matches!(
            u32::from(c),
            0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE0F | 0x200D
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/metrics/oracle.rs"]
mod tests;
