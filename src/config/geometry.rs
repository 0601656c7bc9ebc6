use serde::{Deserialize, Serialize};

use crate::foundation::core::Rect;
use crate::foundation::error::{TypelineError, TypelineResult};
use crate::metrics::oracle::TextStyle;

/// Horizontal placement of a line inside the content box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Flush with the left padding edge.
    Left,
    /// Centered on the canvas.
    #[default]
    Center,
    /// Flush with the right padding edge.
    Right,
}

/// Vertical placement of the line block inside the content box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Block starts at the top padding edge.
    Top,
    /// Block is centered vertically.
    #[default]
    Middle,
    /// Block ends at the bottom padding edge.
    Bottom,
}

/// Canvas and typography geometry shared by every line of a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Canvas width in px.
    pub width: f64,
    /// Canvas height in px.
    pub height: f64,
    /// Horizontal padding on both sides, px.
    pub padding_x: f64,
    /// Vertical padding on both sides, px.
    pub padding_y: f64,
    /// Horizontal alignment of each line.
    pub horizontal_align: HorizontalAlign,
    /// Vertical alignment of the line block.
    pub vertical_align: VerticalAlign,
    /// Font size in px.
    pub font_size: f64,
    /// Distance between stacked line slots, px.
    pub line_height: f64,
    /// Extra advance added after every character, px.
    pub letter_spacing: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 435.0,
            height: 50.0,
            padding_x: 0.0,
            padding_y: 0.0,
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            font_size: 20.0,
            line_height: 26.0,
            letter_spacing: 0.0,
        }
    }
}

impl Geometry {
    /// Check that every dimension is finite and in range.
    pub fn validate(&self) -> TypelineResult<()> {
        fn finite(name: &str, v: f64) -> TypelineResult<()> {
            if !v.is_finite() {
                return Err(TypelineError::validation(format!(
                    "geometry {name} must be finite"
                )));
            }
            Ok(())
        }

        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("padding_x", self.padding_x),
            ("padding_y", self.padding_y),
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("letter_spacing", self.letter_spacing),
        ] {
            finite(name, v)?;
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(TypelineError::validation(
                "geometry width/height must be > 0",
            ));
        }
        if self.padding_x < 0.0 || self.padding_y < 0.0 {
            return Err(TypelineError::validation("geometry padding must be >= 0"));
        }
        if self.font_size <= 0.0 {
            return Err(TypelineError::validation("geometry font_size must be > 0"));
        }
        if self.line_height <= 0.0 {
            return Err(TypelineError::validation(
                "geometry line_height must be > 0",
            ));
        }
        Ok(())
    }

    /// Text style handed to the width oracle.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.font_size,
            letter_spacing: self.letter_spacing,
        }
    }

    /// Canvas minus padding. Padding wider than the canvas collapses the box to a line.
    pub fn content_rect(&self) -> Rect {
        let x0 = self.padding_x.min(self.width / 2.0);
        let y0 = self.padding_y.min(self.height / 2.0);
        Rect::new(x0, y0, self.width - x0, self.height - y0)
    }

    /// Left edge of a line whose fully typed width is `line_width`.
    ///
    /// Text is revealed left to right from this origin, so the cursor tip sits at
    /// `origin + revealed_width`.
    pub fn line_origin_x(&self, line_width: f64) -> f64 {
        let content = self.content_rect();
        match self.horizontal_align {
            HorizontalAlign::Left => content.x0,
            HorizontalAlign::Center => content.center().x - line_width / 2.0,
            HorizontalAlign::Right => content.x1 - line_width,
        }
    }

    /// Vertical center of slot `slot` in a block of `slot_count` slots.
    pub fn slot_y(&self, slot: usize, slot_count: usize) -> f64 {
        let content = self.content_rect();
        let block = self.line_height * slot_count.max(1) as f64;
        let top = match self.vertical_align {
            VerticalAlign::Top => content.y0,
            VerticalAlign::Middle => content.center().y - block / 2.0,
            VerticalAlign::Bottom => content.y1 - block,
        };
        top + self.line_height * (slot as f64 + 0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/geometry.rs"]
mod tests;
