use serde::Serialize;

use crate::config::params::GlobalParams;
use crate::cursor::glyph::CursorGlyph;
use crate::cursor::track::CursorTrack;
use crate::cursor::{merge, track};
use crate::foundation::core::{FillPolicy, TimelineId, frac};
use crate::foundation::error::{TypelineError, TypelineResult};
use crate::metrics::oracle::WidthOracle;
use crate::timeline::begin::{BeginExpr, BeginGraph};
use crate::timeline::erase::{EraseSegment, EraseStrategy, EraseWindow};
use crate::timeline::keys::{KeyTrack, LineValue, OpacityTrack, Window};
use crate::timeline::line::{Line, collect_lines};
use crate::timeline::topology::Topology;
use crate::timing::duration::{erase_duration_ms, print_duration_ms};

/// Computed animation of one line.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTimeline {
    /// Emitted id; the runtime refers to it as `d<index>`.
    pub index: TimelineId,
    /// Position of the line in the caller's list.
    pub source_index: usize,
    /// Line text.
    pub text: String,
    /// Duration of one play of this timeline, ms.
    pub total_duration_ms: f64,
    /// When the runtime starts this timeline.
    pub begin: BeginExpr,
    /// Fractions of `total_duration_ms`, from exactly 0 to exactly 1.
    pub key_times: Vec<f64>,
    /// Revealed span at each key time.
    pub values: Vec<LineValue>,
    /// Freeze at the end or disappear so the chain can loop.
    pub fill_policy: FillPolicy,
    /// Typing window.
    pub print_window: Window,
    /// Erase window, when the line erases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erase_window: Option<Window>,
    /// Parallel opacity track (fade erase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<OpacityTrack>,
    /// Cursor riding on this line (single/replacing topologies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorTrack>,
}

/// Everything an emitter needs to render one request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSet {
    /// Shape of the set.
    pub topology: Topology,
    /// One timeline per non-empty line, in emission order.
    pub lines: Vec<LineTimeline>,
    /// Shared cursor of a stacked block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorTrack>,
    /// Cursor shape, absent when the cursor is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_glyph: Option<CursorGlyph>,
}

impl TimelineSet {
    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> TypelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TypelineError::serde(format!("serialize timelines: {e}")))
    }
}

/// Compute the timelines of `texts`.
///
/// Empty strings are skipped. Inputs are assumed to have passed [`GlobalParams::validate`];
/// out-of-range numbers are tolerated rather than reported.
#[tracing::instrument(
    skip_all,
    fields(lines = texts.len(), multi_line = params.multi_line, repeat = params.repeat)
)]
pub fn build_timelines(
    texts: &[String],
    params: &GlobalParams,
    oracle: &dyn WidthOracle,
) -> TypelineResult<TimelineSet> {
    let lines = collect_lines(texts, oracle, params.geometry.text_style());
    let topology = Topology::select(lines.len(), params.multi_line);
    if lines.is_empty() {
        tracing::debug!("no non-empty lines, nothing to animate");
        return Ok(TimelineSet {
            topology,
            lines: Vec::new(),
            cursor: None,
            cursor_glyph: None,
        });
    }

    let mut timelines = match topology {
        Topology::Single | Topology::Replacing => assemble_replacing(&lines, params, topology)?,
        Topology::Stacked => assemble_stacked(&lines, params)?,
    };

    let cursor_glyph = CursorGlyph::resolve(params, oracle);
    let mut cursor = None;
    if cursor_glyph.is_some() {
        match topology {
            Topology::Single | Topology::Replacing => {
                track::attach_line_cursors(&mut timelines, params);
            }
            Topology::Stacked => {
                cursor = Some(merge::synthesize(&timelines, params.erase_strategy));
            }
        }
    }

    tracing::debug!(
        ?topology,
        timelines = timelines.len(),
        erase = params.erase_strategy.name(),
        "assembled timelines"
    );
    Ok(TimelineSet {
        topology,
        lines: timelines,
        cursor,
        cursor_glyph,
    })
}

fn restart_graph_replacing(count: usize, params: &GlobalParams) -> TypelineResult<BeginGraph> {
    let mut graph = BeginGraph::new(count);
    let last = TimelineId::from_index(count - 1);
    for i in 0..count {
        let id = TimelineId::from_index(i);
        if i == 0 {
            graph.start_at_load(id)?;
            if params.repeat {
                graph.start_after(id, last, params.restart_delay_ms)?;
            }
        } else {
            graph.start_after(id, TimelineId::from_index(i - 1), 0.0)?;
        }
    }
    graph.validate()?;
    Ok(graph)
}

fn restart_graph_stacked(count: usize, params: &GlobalParams) -> TypelineResult<BeginGraph> {
    let mut graph = BeginGraph::new(count);
    let last = TimelineId::from_index(count - 1);
    for i in 0..count {
        let id = TimelineId::from_index(i);
        graph.start_at_load(id)?;
        if params.repeat {
            graph.start_after(id, last, params.restart_delay_ms)?;
        }
    }
    graph.validate()?;
    Ok(graph)
}

fn splice(
    track: &mut KeyTrack<LineValue>,
    segment: &EraseSegment,
    at: impl Fn(f64) -> LineValue,
) {
    for (t, width) in segment.keys() {
        track.push(t, at(width));
    }
}

fn erase_window_of(
    segment: &EraseSegment,
    strategy: EraseStrategy,
    start: f64,
    end: f64,
) -> Option<Window> {
    match strategy {
        EraseStrategy::None => None,
        EraseStrategy::Line | EraseStrategy::Fade if segment.is_empty() => None,
        EraseStrategy::Line | EraseStrategy::Fade => Some(Window { start, end }),
    }
}

fn assemble_replacing(
    lines: &[Line],
    params: &GlobalParams,
    topology: Topology,
) -> TypelineResult<Vec<LineTimeline>> {
    let graph = restart_graph_replacing(lines.len(), params)?;
    let geometry = &params.geometry;
    let strategy = params.erase_strategy;
    let pause = params.inter_line_pause_ms;
    let last = lines.len() - 1;
    let y = geometry.slot_y(0, 1);

    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let id = TimelineId::from_index(i);
        let x = geometry.line_origin_x(line.width);
        let at = |width: f64| LineValue { x, y, width };
        let print = print_duration_ms(line, params);

        let mut track = KeyTrack::new();
        track.push(0.0, at(0.0));

        let (total, fill_policy, erase_window, opacity) = if !params.repeat && i == last {
            let total = print + pause;
            track.push(frac(print, total), at(line.width));
            (total, FillPolicy::Freeze, None, None)
        } else {
            let erase = erase_duration_ms(line, params);
            let total = print + pause + erase + params.post_erase_pause_ms;
            track.push(frac(print, total), at(line.width));

            let window = EraseWindow {
                line,
                start: frac(print + pause, total),
                end: frac(print + pause + erase, total),
            };
            let segment = match topology {
                Topology::Single => strategy.single(&window),
                Topology::Replacing | Topology::Stacked => strategy.replacing(&window),
            };
            splice(&mut track, &segment, at);
            let opacity = segment
                .use_fade
                .then(|| OpacityTrack::fade_out(segment.fade_start, segment.fade_end));
            let erase_window = erase_window_of(&segment, strategy, window.start, window.end);
            (total, FillPolicy::Loop, erase_window, opacity)
        };

        let print_window = Window {
            start: 0.0,
            end: frac(print, total),
        };
        let (key_times, values) = track.finish();
        out.push(LineTimeline {
            index: id,
            source_index: line.source_index,
            text: line.text.clone(),
            total_duration_ms: total,
            begin: graph.expression(id)?,
            key_times,
            values,
            fill_policy,
            print_window,
            erase_window,
            opacity,
            cursor: None,
        });
    }
    Ok(out)
}

/// Absolute erase windows of a repeating stacked block, ms, plus the block duration.
fn stacked_erase_plan(
    lines: &[Line],
    params: &GlobalParams,
    print_end: f64,
) -> (f64, Vec<Option<(f64, f64)>>) {
    let pause = params.inter_line_pause_ms;
    let hold_end = print_end + pause;
    let erases: Vec<f64> = lines
        .iter()
        .map(|l| erase_duration_ms(l, params))
        .collect();
    let erase_total: f64 = erases.iter().sum();

    if !params.repeat {
        return (hold_end, vec![None; lines.len()]);
    }
    match params.erase_strategy {
        EraseStrategy::None => (
            hold_end + params.post_erase_pause_ms,
            vec![None; lines.len()],
        ),
        EraseStrategy::Line => {
            // Last printed erases first; every earlier line waits for the ones below it.
            let mut windows = vec![None; lines.len()];
            let mut cursor = hold_end;
            for (i, e) in erases.iter().enumerate().rev() {
                windows[i] = Some((cursor, cursor + e));
                cursor += e + pause;
            }
            let gaps = pause * (lines.len() - 1) as f64;
            let total = hold_end + erase_total + gaps + params.post_erase_pause_ms;
            (total, windows)
        }
        EraseStrategy::Fade => {
            let window = (hold_end, hold_end + erase_total);
            let total = window.1 + params.post_erase_pause_ms;
            (total, vec![Some(window); lines.len()])
        }
    }
}

fn assemble_stacked(lines: &[Line], params: &GlobalParams) -> TypelineResult<Vec<LineTimeline>> {
    let graph = restart_graph_stacked(lines.len(), params)?;
    let geometry = &params.geometry;
    let strategy = params.erase_strategy;
    let pause = params.inter_line_pause_ms;

    // Line `i` starts `i` of its own print-plus-pause periods after load.
    let print_windows: Vec<(f64, f64)> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let print = print_duration_ms(line, params);
            let start = i as f64 * (print + pause);
            (start, start + print)
        })
        .collect();
    let print_end = print_windows.iter().map(|w| w.1).fold(0.0, f64::max);
    let (total, erase_windows) = stacked_erase_plan(lines, params, print_end);
    let fill_policy = if params.repeat {
        FillPolicy::Loop
    } else {
        FillPolicy::Freeze
    };

    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let id = TimelineId::from_index(i);
        let x = geometry.line_origin_x(line.width);
        let y = geometry.slot_y(i, lines.len());
        let at = |width: f64| LineValue { x, y, width };
        let (print_start, print_stop) = print_windows[i];
        let print_window = Window {
            start: frac(print_start, total),
            end: frac(print_stop, total),
        };

        let mut track = KeyTrack::new();
        track.push(0.0, at(0.0));
        track.push(print_window.start, at(0.0));
        track.push(print_window.end, at(line.width));

        let mut erase_window = None;
        let mut opacity = None;
        if params.repeat {
            let window = match erase_windows[i] {
                Some((s, e)) => EraseWindow {
                    line,
                    start: frac(s, total),
                    end: frac(e, total),
                },
                None => EraseWindow {
                    line,
                    start: print_window.end,
                    end: 1.0,
                },
            };
            let segment = strategy.stacked(&window);
            splice(&mut track, &segment, at);
            if segment.use_fade {
                opacity = Some(OpacityTrack::fade_out(segment.fade_start, segment.fade_end));
            }
            erase_window = erase_window_of(&segment, strategy, window.start, window.end);
        }

        let (key_times, values) = track.finish();
        out.push(LineTimeline {
            index: id,
            source_index: line.source_index,
            text: line.text.clone(),
            total_duration_ms: total,
            begin: graph.expression(id)?,
            key_times,
            values,
            fill_policy,
            print_window,
            erase_window,
            opacity,
            cursor: None,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/assemble.rs"]
mod tests;
