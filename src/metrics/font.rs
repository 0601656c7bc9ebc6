use std::cell::RefCell;
use std::path::Path;

use crate::foundation::error::{TypelineError, TypelineResult};
use crate::metrics::oracle::{ApproxWidth, TextStyle, WidthOracle};

/// Brush type for measurement-only layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MeasureBrush;

struct LayoutContexts {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
}

/// Width oracle backed by real font metrics, shaped with Parley.
///
/// The font is registered once; every query shapes the text with that family so kerning,
/// ligatures and letter spacing match what a renderer using the same font would produce.
pub struct FontWidthOracle {
    contexts: RefCell<LayoutContexts>,
    family: String,
}

impl std::fmt::Debug for FontWidthOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontWidthOracle")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl FontWidthOracle {
    /// Register raw font bytes (TTF/OTF) and build an oracle for the first family found.
    pub fn from_bytes(font_bytes: Vec<u8>) -> TypelineResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| TypelineError::metrics("no font families registered from font bytes"))?;

        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TypelineError::metrics("registered font family has no name"))?
            .to_string();

        Ok(Self {
            contexts: RefCell::new(LayoutContexts {
                font_ctx,
                layout_ctx: parley::LayoutContext::new(),
            }),
            family,
        })
    }

    /// Read a font file from disk and build an oracle for it.
    pub fn from_path(path: impl AsRef<Path>) -> TypelineResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            TypelineError::metrics(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Family name the oracle shapes with.
    pub fn family(&self) -> &str {
        &self.family
    }

    fn shaped_width(&self, text: &str, style: TextStyle) -> f64 {
        let mut guard = self.contexts.borrow_mut();
        let LayoutContexts {
            font_ctx,
            layout_ctx,
        } = &mut *guard;

        let mut builder = layout_ctx.ranged_builder(font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(
            style.font_size as f32,
        ));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            style.letter_spacing as f32,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(MeasureBrush));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(None);
        f64::from(layout.full_width())
    }
}

impl WidthOracle for FontWidthOracle {
    fn width(&self, text: &str, style: TextStyle) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let w = self.shaped_width(text, style);
        if w.is_finite() {
            w
        } else {
            ApproxWidth.width(text, style)
        }
    }
}

/// Pick the best available oracle: font metrics when `font_path` loads, the fixed-width
/// approximation otherwise. Never fails.
pub fn resolve_oracle(font_path: Option<&Path>) -> Box<dyn WidthOracle> {
    let Some(path) = font_path else {
        tracing::debug!("no font supplied, using approximate character widths");
        return Box::new(ApproxWidth);
    };
    match FontWidthOracle::from_path(path) {
        Ok(oracle) => {
            tracing::debug!(family = oracle.family(), "loaded font metrics");
            Box::new(oracle)
        }
        Err(err) => {
            tracing::warn!(%err, "font metrics unavailable, using approximate character widths");
            Box::new(ApproxWidth)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metrics/font.rs"]
mod tests;
