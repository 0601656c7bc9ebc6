use serde::{Deserialize, Serialize};

use crate::config::params::GlobalParams;
use crate::metrics::oracle::WidthOracle;

/// Glyph shown by [`CursorStyle::Emoji`].
pub const DEFAULT_EMOJI_CURSOR: &str = "✏️";

/// Caret drawn at the tip of the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorStyle {
    /// No cursor.
    None,
    /// Thin vertical bar.
    #[default]
    Straight,
    /// Underscore below the next character cell.
    Underlined,
    /// Filled character cell.
    Block,
    /// An emoji glyph.
    Emoji,
    /// A caller-supplied glyph.
    Custom,
}

impl CursorStyle {
    /// Resolve a style name. Unknown names resolve to [`CursorStyle::Straight`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "straight" => Self::Straight,
            "underlined" => Self::Underlined,
            "block" => Self::Block,
            "emoji" => Self::Emoji,
            "custom" => Self::Custom,
            other => {
                tracing::debug!(name = other, "unknown cursor style, using 'straight'");
                Self::Straight
            }
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Straight => "straight",
            Self::Underlined => "underlined",
            Self::Block => "block",
            Self::Emoji => "emoji",
            Self::Custom => "custom",
        }
    }
}

impl Serialize for CursorStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CursorStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Cursor box relative to a cursor track point (text tip, slot center).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorGlyph {
    /// Style the box was derived from.
    pub style: CursorStyle,
    /// Glyph text for emoji/custom cursors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Box width, px.
    pub width: f64,
    /// Box height, px.
    pub height: f64,
    /// Horizontal offset of the box's left edge from the track point, px.
    pub offset_x: f64,
    /// Vertical offset of the box's top edge from the track point, px.
    pub offset_y: f64,
}

impl CursorGlyph {
    /// Cursor box for the request, or `None` when the cursor is disabled.
    pub fn resolve(params: &GlobalParams, oracle: &dyn WidthOracle) -> Option<Self> {
        let style = params.geometry.text_style();
        let fs = style.font_size;
        let stroke = (fs / 10.0).max(1.0);
        let cell = oracle.width("█", style).max(stroke);

        let glyph = |text: &str| {
            let width = oracle.width(text, style).max(stroke);
            Self {
                style: params.cursor_style,
                text: Some(text.to_owned()),
                width,
                height: fs,
                offset_x: 0.0,
                offset_y: -fs / 2.0,
            }
        };

        match params.cursor_style {
            CursorStyle::None => None,
            CursorStyle::Straight => Some(Self {
                style: CursorStyle::Straight,
                text: None,
                width: stroke,
                height: fs,
                offset_x: 0.0,
                offset_y: -fs / 2.0,
            }),
            CursorStyle::Underlined => Some(Self {
                style: CursorStyle::Underlined,
                text: None,
                width: cell,
                height: stroke,
                offset_x: 0.0,
                offset_y: fs / 2.0 - stroke,
            }),
            CursorStyle::Block => Some(Self {
                style: CursorStyle::Block,
                text: None,
                width: cell,
                height: fs,
                offset_x: 0.0,
                offset_y: -fs / 2.0,
            }),
            CursorStyle::Emoji => Some(glyph(DEFAULT_EMOJI_CURSOR)),
            CursorStyle::Custom => match params.custom_cursor.as_deref() {
                Some(text) if !text.is_empty() => Some(glyph(text)),
                _ => {
                    tracing::warn!("custom cursor without a glyph, using 'straight'");
                    let fallback = GlobalParams {
                        cursor_style: CursorStyle::Straight,
                        ..params.clone()
                    };
                    Self::resolve(&fallback, oracle)
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/glyph.rs"]
mod tests;
