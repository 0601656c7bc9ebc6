use std::fmt;

pub use kurbo::Rect;

/// Identifier of an emitted line timeline.
///
/// Ids are dense and follow emission order (empty input lines are skipped before ids are
/// assigned). The animation runtime refers to a timeline as `d<id>`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimelineId(pub u32);

impl TimelineId {
    /// Build an id from a 0-based emission index.
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Emission index as `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TimelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

/// What a finished timeline does with its last value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// Hold the final value forever.
    Freeze,
    /// Revert once finished so the element disappears and the chain can restart.
    Loop,
}

impl FillPolicy {
    /// Attribute value understood by SMIL-style runtimes.
    pub fn as_fill_attr(self) -> &'static str {
        match self {
            Self::Freeze => "freeze",
            Self::Loop => "remove",
        }
    }
}

/// Convert an absolute offset into a fraction of `total_ms`, clamped to `[0, 1]`.
///
/// A non-positive total maps everything to `0`.
pub fn frac(at_ms: f64, total_ms: f64) -> f64 {
    if total_ms <= 0.0 || !total_ms.is_finite() {
        return 0.0;
    }
    (at_ms / total_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
