use crate::cursor::track::CursorTrack;
use crate::foundation::core::{FillPolicy, TimelineId};
use crate::timeline::assemble::LineTimeline;
use crate::timeline::begin::BeginExpr;
use crate::timeline::erase::EraseStrategy;
use crate::timeline::keys::{KeyTrack, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActivityKind {
    Print,
    Erase,
}

/// Span of a stacked block during which one line moves its text tip.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ActivityInterval {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) line: TimelineId,
    pub(crate) kind: ActivityKind,
    pub(crate) key_times: Vec<f64>,
    pub(crate) xs: Vec<f64>,
    pub(crate) y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CursorPoint {
    x: f64,
    y: f64,
    opacity: f64,
}

fn interval(line: &LineTimeline, window: Window, kind: ActivityKind) -> Option<ActivityInterval> {
    let mut keys: Vec<(f64, f64)> = line
        .key_times
        .iter()
        .zip(&line.values)
        .filter(|(t, _)| window.contains(**t))
        .map(|(t, v)| (*t, v.tip_x()))
        .collect();
    // A cut co-located with the window edge belongs to the next phase.
    keys.dedup_by(|next, kept| next.0 == kept.0);
    if keys.is_empty() {
        return None;
    }
    let (key_times, xs) = keys.into_iter().unzip();
    Some(ActivityInterval {
        start: window.start,
        end: window.end,
        line: line.index,
        kind,
        key_times,
        xs,
        y: line.values.first()?.y,
    })
}

/// Print and erase intervals of every line, ordered by start then end.
///
/// Only the `line` erase moves the text tip, so other strategies contribute print intervals
/// alone.
pub(crate) fn activity_intervals(
    lines: &[LineTimeline],
    strategy: EraseStrategy,
) -> Vec<ActivityInterval> {
    let mut out = Vec::with_capacity(lines.len() * 2);
    for line in lines {
        out.extend(interval(line, line.print_window, ActivityKind::Print));
        if strategy == EraseStrategy::Line
            && let Some(window) = line.erase_window
        {
            out.extend(interval(line, window, ActivityKind::Erase));
        }
    }
    out.sort_by(|a, b| a.start.total_cmp(&b.start).then(a.end.total_cmp(&b.end)));
    out
}

/// One cursor for a whole stacked block, derived from the lines' activity.
///
/// The cursor is invisible until the first line types, jumps between lines without visible
/// travel, holds still across pauses, and vanishes when an erase finishes (or, when nothing
/// erases, when the last line finishes typing).
pub(crate) fn synthesize(lines: &[LineTimeline], strategy: EraseStrategy) -> CursorTrack {
    let intervals = activity_intervals(lines, strategy);
    let has_erase = intervals.iter().any(|iv| iv.kind == ActivityKind::Erase);
    let last_print = intervals
        .iter()
        .rposition(|iv| iv.kind == ActivityKind::Print);

    let mut track = KeyTrack::new();
    if let Some(first) = intervals.first() {
        track.push(
            0.0,
            CursorPoint {
                x: first.xs[0],
                y: first.y,
                opacity: 0.0,
            },
        );
    }

    for (idx, iv) in intervals.iter().enumerate() {
        tracing::trace!(
            line = %iv.line,
            kind = ?iv.kind,
            start = iv.start,
            end = iv.end,
            "cursor interval"
        );
        let start = iv.key_times[0];
        if let Some((last_t, last)) = track.last().map(|(t, p)| (t, *p))
            && start > last_t
            && last.opacity > 0.0
        {
            track.push(start, last);
        }

        let jump_to = CursorPoint {
            x: iv.xs[0],
            y: iv.y,
            opacity: 0.0,
        };
        track.push(start, jump_to);
        track.push(
            start,
            CursorPoint {
                opacity: 1.0,
                ..jump_to
            },
        );

        for (&t, &x) in iv.key_times.iter().zip(&iv.xs).skip(1) {
            track.push(
                t,
                CursorPoint {
                    x,
                    y: iv.y,
                    opacity: 1.0,
                },
            );
        }

        let vanish = iv.kind == ActivityKind::Erase || (Some(idx) == last_print && !has_erase);
        if vanish {
            let end = iv.key_times.len() - 1;
            let at = CursorPoint {
                x: iv.xs[end],
                y: iv.y,
                opacity: 1.0,
            };
            track.push(iv.key_times[end], at);
            track.push(iv.key_times[end], CursorPoint { opacity: 0.0, ..at });
        }
    }

    if track.is_empty() {
        track.push(
            0.0,
            CursorPoint {
                x: 0.0,
                y: 0.0,
                opacity: 0.0,
            },
        );
    }
    let (key_times, points) = track.finish();

    let (total_duration_ms, begin, fill_policy) = match lines.first() {
        Some(l) => (l.total_duration_ms, l.begin.clone(), l.fill_policy),
        None => (0.0, BeginExpr::at_load(), FillPolicy::Freeze),
    };
    CursorTrack {
        total_duration_ms,
        begin,
        key_times,
        x: points.iter().map(|p| p.x).collect(),
        y: points.iter().map(|p| p.y).collect(),
        opacity: points.iter().map(|p| p.opacity).collect(),
        fill_policy,
        finish_hide: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/merge.rs"]
mod tests;
