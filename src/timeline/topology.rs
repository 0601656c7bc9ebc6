use serde::Serialize;

/// Structural shape of a timeline set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// One line in one slot.
    Single,
    /// Several lines taking turns in the same slot.
    Replacing,
    /// Every line in its own slot, typed in a staggered sequence.
    Stacked,
}

impl Topology {
    /// Pick the topology for `line_count` non-empty lines.
    ///
    /// `multi_line` always stacks, even a single line.
    pub fn select(line_count: usize, multi_line: bool) -> Self {
        if multi_line {
            Self::Stacked
        } else if line_count <= 1 {
            Self::Single
        } else {
            Self::Replacing
        }
    }
}
