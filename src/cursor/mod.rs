pub(crate) mod glyph;
pub(crate) mod merge;
pub(crate) mod track;
