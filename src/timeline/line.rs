use crate::metrics::oracle::{TextStyle, WidthOracle, char_count, prefix_widths};

/// One line of text to type, measured once per request.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Text after upstream preprocessing.
    pub text: String,
    /// User-perceived character count.
    pub char_count: usize,
    /// Fully typed width, px.
    pub width: f64,
    /// Position in the caller's line list (before empty lines were dropped).
    pub source_index: usize,
    prefix_widths: Vec<f64>,
}

impl Line {
    /// Measure `text` with `oracle`.
    pub fn measure(
        text: &str,
        source_index: usize,
        oracle: &dyn WidthOracle,
        style: TextStyle,
    ) -> Self {
        let prefix_widths = prefix_widths(oracle, text, style);
        Self {
            text: text.to_owned(),
            char_count: char_count(text),
            width: prefix_widths.last().copied().unwrap_or(0.0),
            source_index,
            prefix_widths,
        }
    }

    /// Width left on screen once `removed` characters were erased from the right.
    pub fn width_after_erasing(&self, removed: usize) -> f64 {
        let kept = self.char_count.saturating_sub(removed);
        self.prefix_widths.get(kept).copied().unwrap_or(0.0)
    }
}

/// Measure every non-empty line, keeping the caller's indices.
pub fn collect_lines(texts: &[String], oracle: &dyn WidthOracle, style: TextStyle) -> Vec<Line> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(i, text)| {
            if text.is_empty() {
                tracing::debug!(source_index = i, "skipping empty line");
                return None;
            }
            Some(Line::measure(text, i, oracle, style))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/line.rs"]
mod tests;
