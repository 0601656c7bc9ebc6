use serde::{Deserialize, Serialize};

use crate::config::geometry::Geometry;
use crate::cursor::glyph::CursorStyle;
use crate::foundation::error::{TypelineError, TypelineResult};
use crate::timeline::erase::EraseStrategy;

/// Request-wide configuration, immutable for the duration of one generation.
///
/// Every field has a serde default so a request may specify only what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalParams {
    /// Typing speed in characters per second.
    pub print_rate: f64,
    /// Erasing speed in characters per second.
    pub erase_rate: f64,
    /// Hold after a line (or block) finishes typing, ms.
    pub inter_line_pause_ms: f64,
    /// Hold after a line (or block) finishes erasing, ms.
    pub post_erase_pause_ms: f64,
    /// Extra delay appended to the loop-restart trigger, ms.
    pub restart_delay_ms: f64,
    /// Restart from the first line once the sequence finishes.
    pub repeat: bool,
    /// Stack all lines in distinct slots instead of replacing one slot.
    pub multi_line: bool,
    /// How typed text disappears.
    pub erase_strategy: EraseStrategy,
    /// Caret drawn at the text tip.
    pub cursor_style: CursorStyle,
    /// Glyph used by [`CursorStyle::Custom`].
    pub custom_cursor: Option<String>,
    /// Drop the cursor once a non-repeating sequence is done.
    pub hide_cursor_on_finish: bool,
    /// Canvas and typography.
    pub geometry: Geometry,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            print_rate: 10.0,
            erase_rate: 20.0,
            inter_line_pause_ms: 1000.0,
            post_erase_pause_ms: 500.0,
            restart_delay_ms: 0.0,
            repeat: true,
            multi_line: false,
            erase_strategy: EraseStrategy::Line,
            cursor_style: CursorStyle::Straight,
            custom_cursor: None,
            hide_cursor_on_finish: false,
            geometry: Geometry::default(),
        }
    }
}

impl GlobalParams {
    /// Boundary validation. The timeline engine assumes these checks already passed.
    pub fn validate(&self) -> TypelineResult<()> {
        for (name, rate) in [("print_rate", self.print_rate), ("erase_rate", self.erase_rate)] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(TypelineError::validation(format!(
                    "{name} must be finite and > 0 (got {rate})"
                )));
            }
        }
        for (name, ms) in [
            ("inter_line_pause_ms", self.inter_line_pause_ms),
            ("post_erase_pause_ms", self.post_erase_pause_ms),
            ("restart_delay_ms", self.restart_delay_ms),
        ] {
            if !ms.is_finite() || ms < 0.0 {
                return Err(TypelineError::validation(format!(
                    "{name} must be finite and >= 0 (got {ms})"
                )));
            }
        }
        if self.cursor_style == CursorStyle::Custom
            && self.custom_cursor.as_deref().is_none_or(str::is_empty)
        {
            return Err(TypelineError::validation(
                "cursor_style 'custom' requires a non-empty custom_cursor",
            ));
        }
        self.geometry.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
