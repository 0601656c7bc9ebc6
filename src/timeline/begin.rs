use std::fmt;

use crate::foundation::core::TimelineId;
use crate::foundation::error::{TypelineError, TypelineResult};

/// One way a timeline can be started by the animation runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Start at document load.
    AtLoad,
    /// Start when another timeline ends, optionally after a delay.
    AfterEnd {
        /// Timeline whose end event fires this one.
        of: TimelineId,
        /// Delay after the end event, ms.
        delay_ms: f64,
    },
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLoad => f.write_str("0s"),
            Self::AfterEnd { of, delay_ms } if *delay_ms > 0.0 => {
                write!(f, "{of}.end+{delay_ms}ms")
            }
            Self::AfterEnd { of, .. } => write!(f, "{of}.end"),
        }
    }
}

/// Begin expression: the runtime starts the timeline on whichever trigger fires.
///
/// Serializes to the `;`-joined syntax of SMIL `begin` attributes, e.g. `0s;d2.end`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BeginExpr {
    triggers: Vec<Trigger>,
}

impl BeginExpr {
    /// Expression that fires at document load only.
    pub fn at_load() -> Self {
        Self {
            triggers: vec![Trigger::AtLoad],
        }
    }

    /// Expression that fires when `of` ends.
    pub fn after_end(of: TimelineId, delay_ms: f64) -> Self {
        Self {
            triggers: vec![Trigger::AfterEnd { of, delay_ms }],
        }
    }
}

impl fmt::Display for BeginExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, trigger) in self.triggers.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{trigger}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for BeginExpr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Dependency graph over timeline end events.
///
/// Nodes are line timelines; an edge `a -> b` means "`b` starts after `a` ends". Loop restarts
/// are back edges, so the graph may be cyclic; every node must still be reachable from a
/// node that starts at load.
#[derive(Clone, Debug)]
pub struct BeginGraph {
    nodes: Vec<Vec<Trigger>>,
}

impl BeginGraph {
    /// Graph with `count` nodes and no triggers yet.
    pub fn new(count: usize) -> Self {
        Self {
            nodes: vec![Vec::new(); count],
        }
    }

    /// Number of timelines in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no timelines.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn check(&self, id: TimelineId) -> TypelineResult<()> {
        if id.index() >= self.nodes.len() {
            return Err(TypelineError::timeline(format!(
                "timeline {id} is not part of a graph of {} timelines",
                self.nodes.len()
            )));
        }
        Ok(())
    }

    /// Let `id` start at document load.
    pub fn start_at_load(&mut self, id: TimelineId) -> TypelineResult<()> {
        self.check(id)?;
        self.nodes[id.index()].push(Trigger::AtLoad);
        Ok(())
    }

    /// Let `id` start `delay_ms` after `pred` ends.
    pub fn start_after(
        &mut self,
        id: TimelineId,
        pred: TimelineId,
        delay_ms: f64,
    ) -> TypelineResult<()> {
        self.check(id)?;
        self.check(pred)?;
        self.nodes[id.index()].push(Trigger::AfterEnd {
            of: pred,
            delay_ms: delay_ms.max(0.0),
        });
        Ok(())
    }

    /// Begin expression of `id`.
    pub fn expression(&self, id: TimelineId) -> TypelineResult<BeginExpr> {
        self.check(id)?;
        Ok(BeginExpr {
            triggers: self.nodes[id.index()].clone(),
        })
    }

    /// Ensure every timeline is eventually started.
    pub fn validate(&self) -> TypelineResult<()> {
        let mut reached: Vec<bool> = self
            .nodes
            .iter()
            .map(|t| t.contains(&Trigger::AtLoad))
            .collect();
        let mut changed = true;
        while changed {
            changed = false;
            for (i, triggers) in self.nodes.iter().enumerate() {
                if reached[i] {
                    continue;
                }
                let fired = triggers.iter().any(|t| match t {
                    Trigger::AtLoad => true,
                    Trigger::AfterEnd { of, .. } => reached[of.index()],
                });
                if fired {
                    reached[i] = true;
                    changed = true;
                }
            }
        }
        match reached.iter().position(|r| !r) {
            Some(i) => Err(TypelineError::timeline(format!(
                "timeline {} never starts",
                TimelineId::from_index(i)
            ))),
            None => Ok(()),
        }
    }

    /// Absolute start of every timeline during the first cycle, ms after load.
    ///
    /// `durations_ms[i]` is the duration of timeline `i`. Each timeline starts at its
    /// earliest trigger.
    pub fn first_cycle_start_ms(&self, durations_ms: &[f64]) -> TypelineResult<Vec<f64>> {
        if durations_ms.len() != self.nodes.len() {
            return Err(TypelineError::timeline(format!(
                "expected {} durations, got {}",
                self.nodes.len(),
                durations_ms.len()
            )));
        }
        self.validate()?;

        let mut start: Vec<Option<f64>> = vec![None; self.nodes.len()];
        // Relaxation over at most `n` rounds: every shortest chain has fewer than `n` edges.
        for _ in 0..=self.nodes.len() {
            let mut changed = false;
            for (i, triggers) in self.nodes.iter().enumerate() {
                for t in triggers {
                    let candidate = match t {
                        Trigger::AtLoad => Some(0.0),
                        Trigger::AfterEnd { of, delay_ms } => {
                            start[of.index()].map(|s| s + durations_ms[of.index()] + delay_ms)
                        }
                    };
                    if let Some(c) = candidate
                        && start[i].is_none_or(|s| c < s)
                    {
                        start[i] = Some(c);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        Ok(start.into_iter().map(|s| s.unwrap_or(0.0)).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/begin.rs"]
mod tests;
