use serde::{Deserialize, Serialize};

/// Keyed value of a line timeline: the visible span of a line at one instant.
///
/// Renderers typically express it as the path `m{x},{y} h{width}` that clips or carries the text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineValue {
    /// Left edge of the line, px.
    pub x: f64,
    /// Vertical center of the line slot, px.
    pub y: f64,
    /// Revealed width, px.
    pub width: f64,
}

impl LineValue {
    /// Right edge of the revealed text (where a cursor sits).
    pub fn tip_x(&self) -> f64 {
        self.x + self.width
    }

    /// Relative SVG path descriptor for this value.
    pub fn path_d(&self) -> String {
        format!("m{},{} h{}", self.x, self.y, self.width)
    }
}

/// Time window inside a timeline, as fractions of its duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Inclusive start fraction.
    pub start: f64,
    /// Inclusive end fraction.
    pub end: f64,
}

impl Window {
    /// Whether `t` falls inside the window.
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Parallel opacity timeline, used by the fade erase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpacityTrack {
    /// Fractions of the owning timeline's duration.
    pub key_times: Vec<f64>,
    /// Opacity at each key time.
    pub values: Vec<f64>,
}

impl OpacityTrack {
    /// Fully opaque until `fade_start`, ramping to transparent at `fade_end`.
    pub fn fade_out(fade_start: f64, fade_end: f64) -> Self {
        let mut track = KeyTrack::new();
        track.push(0.0, 1.0);
        track.push(fade_start, 1.0);
        track.push(fade_end, 0.0);
        let (key_times, values) = track.finish();
        Self { key_times, values }
    }
}

/// Incremental builder for `keyTimes`/`values` pairs.
///
/// Times are clamped into `[0, 1]` and never move backwards. Pushing the exact same
/// `(time, value)` twice in a row is a no-op; the same time with a different value is kept,
/// which is how instant jumps are expressed.
#[derive(Clone, Debug)]
pub(crate) struct KeyTrack<T> {
    key_times: Vec<f64>,
    values: Vec<T>,
}

impl<T> Default for KeyTrack<T> {
    fn default() -> Self {
        Self {
            key_times: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> KeyTrack<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, t: f64, value: T) {
        let floor = self.key_times.last().copied().unwrap_or(0.0);
        let t = if t.is_nan() { floor } else { t.clamp(floor, 1.0) };
        if self.key_times.last() == Some(&t) && self.values.last() == Some(&value) {
            return;
        }
        self.key_times.push(t);
        self.values.push(value);
    }

    pub(crate) fn last(&self) -> Option<(f64, &T)> {
        Some((*self.key_times.last()?, self.values.last()?))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.key_times.is_empty()
    }

    /// Keys as pushed, without closing the track.
    pub(crate) fn into_parts(self) -> (Vec<f64>, Vec<T>) {
        (self.key_times, self.values)
    }

    /// Close the track so it starts at exactly `0` and ends at exactly `1`.
    ///
    /// A track whose last key is short of `1` is padded by holding the last value.
    pub(crate) fn finish(mut self) -> (Vec<f64>, Vec<T>) {
        if let Some(first) = self.key_times.first_mut() {
            *first = 0.0;
        }
        match (self.key_times.last().copied(), self.values.last().cloned()) {
            (Some(t), Some(v)) if t < 1.0 => {
                self.key_times.push(1.0);
                self.values.push(v);
            }
            _ => {}
        }
        (self.key_times, self.values)
    }
}

/// Whether a key-time sequence is a valid timeline: starts at 0, ends at 1, never decreases.
pub fn is_well_formed(key_times: &[f64]) -> bool {
    key_times.first() == Some(&0.0)
        && key_times.last() == Some(&1.0)
        && key_times.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/keys.rs"]
mod tests;
