//! typeline computes the animation timelines of text that is typed and erased.
//!
//! Given lines of text, typing/erasing rates, layout geometry and a few behavioral flags, it
//! produces keyframed timelines for a declarative, event-chained animation runtime:
//!
//! - Describe a request with [`RenderRequest`] (or [`GlobalParams`] + lines)
//! - Pick a [`WidthOracle`] ([`FontWidthOracle`] for real metrics, [`ApproxWidth`] otherwise)
//! - Call [`build_timelines`] and hand the [`TimelineSet`] to an emitter
//!
//! The engine is pure and deterministic; it never plays or schedules anything.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod cursor;
mod foundation;
mod metrics;
mod timeline;
mod timing;

pub use crate::config::geometry::{Geometry, HorizontalAlign, VerticalAlign};
pub use crate::config::params::GlobalParams;
pub use crate::config::request::RenderRequest;
pub use crate::cursor::glyph::{CursorGlyph, CursorStyle, DEFAULT_EMOJI_CURSOR};
pub use crate::cursor::track::{CursorTrack, FINISH_HIDE_MS, FinishHide, line_cursor};
pub use crate::foundation::core::{FillPolicy, Rect, TimelineId, frac};
pub use crate::foundation::error::{TypelineError, TypelineResult};
pub use crate::metrics::font::{FontWidthOracle, resolve_oracle};
pub use crate::metrics::oracle::{
    APPROX_CHAR_EM, APPROX_EMOJI_FACTOR, ApproxWidth, TextStyle, WidthOracle, char_count,
    is_emoji_class, prefix_widths,
};
pub use crate::timeline::assemble::{LineTimeline, TimelineSet, build_timelines};
pub use crate::timeline::begin::{BeginExpr, BeginGraph, Trigger};
pub use crate::timeline::erase::{EraseSegment, EraseStrategy, EraseWindow, NONE_CUT_AT};
pub use crate::timeline::keys::{LineValue, OpacityTrack, Window, is_well_formed};
pub use crate::timeline::line::{Line, collect_lines};
pub use crate::timeline::topology::Topology;
pub use crate::timing::duration::{MIN_RATE, duration_ms, erase_duration_ms, print_duration_ms};
