use serde::Serialize;

use crate::config::params::GlobalParams;
use crate::foundation::core::FillPolicy;
use crate::timeline::assemble::LineTimeline;
use crate::timeline::begin::BeginExpr;

/// Keyframed position and visibility of a cursor.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorTrack {
    /// Duration of one play, ms.
    pub total_duration_ms: f64,
    /// When the runtime starts the track.
    pub begin: BeginExpr,
    /// Fractions of `total_duration_ms`; equal neighbours mark instant jumps.
    pub key_times: Vec<f64>,
    /// Cursor x at each key time, px.
    pub x: Vec<f64>,
    /// Cursor y (slot center) at each key time, px.
    pub y: Vec<f64>,
    /// Cursor opacity at each key time.
    pub opacity: Vec<f64>,
    /// Freeze at the end or disappear with the line.
    pub fill_policy: FillPolicy,
    /// Opacity drop played once the whole sequence is done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_hide: Option<FinishHide>,
}

impl CursorTrack {
    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.key_times.len()
    }

    /// Whether the track has no keyframes.
    pub fn is_empty(&self) -> bool {
        self.key_times.is_empty()
    }

    /// Parallel arrays agree in length and key times never decrease.
    pub fn is_consistent(&self) -> bool {
        let n = self.key_times.len();
        self.x.len() == n
            && self.y.len() == n
            && self.opacity.len() == n
            && self.key_times.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Short opacity animation that hides the cursor for good.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishHide {
    /// Fires on the final line's end event.
    pub begin: BeginExpr,
    /// Duration, ms.
    pub duration_ms: f64,
    /// Key times of the drop.
    pub key_times: Vec<f64>,
    /// Opacity at each key time.
    pub opacity: Vec<f64>,
    /// Always [`FillPolicy::Freeze`].
    pub fill_policy: FillPolicy,
}

/// Duration of the end-of-sequence opacity drop, ms.
pub const FINISH_HIDE_MS: f64 = 1.0;

/// Cursor that rides on the tip of `line` for the line's whole timeline.
pub fn line_cursor(line: &LineTimeline) -> CursorTrack {
    CursorTrack {
        total_duration_ms: line.total_duration_ms,
        begin: line.begin.clone(),
        key_times: line.key_times.clone(),
        x: line.values.iter().map(|v| v.tip_x()).collect(),
        y: line.values.iter().map(|v| v.y).collect(),
        opacity: vec![1.0; line.key_times.len()],
        fill_policy: line.fill_policy,
        finish_hide: None,
    }
}

/// Attach a riding cursor to every line of a single/replacing set.
pub(crate) fn attach_line_cursors(lines: &mut [LineTimeline], params: &GlobalParams) {
    let hide_at_end = !params.repeat && params.hide_cursor_on_finish;
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter_mut().enumerate() {
        let mut cursor = line_cursor(line);
        if hide_at_end && i == last {
            cursor.finish_hide = Some(FinishHide {
                begin: BeginExpr::after_end(line.index, 0.0),
                duration_ms: FINISH_HIDE_MS,
                key_times: vec![0.0, 1.0],
                opacity: vec![1.0, 0.0],
                fill_policy: FillPolicy::Freeze,
            });
        }
        line.cursor = Some(cursor);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/track.rs"]
mod tests;
