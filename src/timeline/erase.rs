use serde::{Deserialize, Serialize};

use crate::timeline::keys::KeyTrack;
use crate::timeline::line::Line;

/// Fraction at which a stacked block without an erase animation is cut.
pub const NONE_CUT_AT: f64 = 0.99;

/// How typed text disappears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EraseStrategy {
    /// Text stays until the timeline ends.
    None,
    /// Characters are removed one at a time from the right.
    #[default]
    Line,
    /// Text fades out at full width.
    Fade,
}

impl EraseStrategy {
    /// Resolve a strategy name. Unknown names resolve to [`EraseStrategy::Line`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "line" => Self::Line,
            "fade" => Self::Fade,
            other => {
                tracing::debug!(name = other, "unknown erase strategy, using 'line'");
                Self::Line
            }
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Line => "line",
            Self::Fade => "fade",
        }
    }

    /// Erase segment for the lone line of a single-line request.
    pub fn single(self, window: &EraseWindow<'_>) -> EraseSegment {
        self.replacing(window)
    }

    /// Erase segment for a line that gives its slot to the next line.
    pub fn replacing(self, window: &EraseWindow<'_>) -> EraseSegment {
        match self {
            Self::None => EraseSegment::hold(),
            Self::Line => line_steps(window),
            Self::Fade => fade(window),
        }
    }

    /// Erase segment for one line of a stacked block.
    pub fn stacked(self, window: &EraseWindow<'_>) -> EraseSegment {
        match self {
            Self::None => cut(window),
            Self::Line => line_steps(window),
            Self::Fade => fade(window),
        }
    }
}

impl Serialize for EraseStrategy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EraseStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Where a line's erase happens, as fractions of its timeline.
///
/// For [`EraseStrategy::None`] in a stacked block, `start` is the end of the line's typing.
#[derive(Clone, Copy, Debug)]
pub struct EraseWindow<'a> {
    /// Line being erased.
    pub line: &'a Line,
    /// Erase start fraction.
    pub start: f64,
    /// Erase end fraction.
    pub end: f64,
}

/// Erase portion of a line timeline: widths keyed by fraction, plus the fade window.
#[derive(Clone, Debug, PartialEq)]
pub struct EraseSegment {
    /// Whether a parallel opacity fade replaces the width animation.
    pub use_fade: bool,
    /// Fade start fraction (meaningful when `use_fade`).
    pub fade_start: f64,
    /// Fade end fraction (meaningful when `use_fade`).
    pub fade_end: f64,
    /// Key times of the segment.
    pub key_times: Vec<f64>,
    /// Revealed width at each key time, px.
    pub values: Vec<f64>,
}

impl EraseSegment {
    fn hold() -> Self {
        Self::from_keys(Vec::new(), Vec::new())
    }

    fn from_keys(key_times: Vec<f64>, values: Vec<f64>) -> Self {
        Self {
            use_fade: false,
            fade_start: 0.0,
            fade_end: 0.0,
            key_times,
            values,
        }
    }

    /// Whether the segment contributes any keyframes.
    pub fn is_empty(&self) -> bool {
        self.key_times.is_empty()
    }

    /// `(time, width)` pairs.
    pub fn keys(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.key_times
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

fn line_steps(window: &EraseWindow<'_>) -> EraseSegment {
    let line = window.line;
    let n = line.char_count;
    let span = (window.end - window.start).max(0.0);

    let mut track = KeyTrack::new();
    track.push(window.start, line.width);
    for k in 1..=n {
        let t = if k == n {
            window.end.max(window.start)
        } else {
            window.start + span * (k as f64 / n as f64)
        };
        track.push(t, line.width_after_erasing(k));
    }
    let (key_times, values) = track.into_parts();
    EraseSegment::from_keys(key_times, values)
}

fn fade(window: &EraseWindow<'_>) -> EraseSegment {
    let w = window.line.width;
    let mut track = KeyTrack::new();
    track.push(window.start, w);
    track.push(window.end, w);
    let (key_times, values) = track.into_parts();
    EraseSegment {
        use_fade: true,
        fade_start: window.start,
        fade_end: window.end.max(window.start),
        key_times,
        values,
    }
}

fn cut(window: &EraseWindow<'_>) -> EraseSegment {
    let at = NONE_CUT_AT.max(window.start);
    let mut track = KeyTrack::new();
    track.push(at, window.line.width);
    track.push(1.0, 0.0);
    let (key_times, values) = track.into_parts();
    EraseSegment::from_keys(key_times, values)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/erase.rs"]
mod tests;
