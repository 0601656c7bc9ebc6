use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::config::params::GlobalParams;
use crate::foundation::error::{TypelineError, TypelineResult};
use crate::metrics::oracle::WidthOracle;
use crate::timeline::assemble::{TimelineSet, build_timelines};

/// JSON-facing request: the lines to animate and how.
///
/// ```json
/// { "lines": ["Hello", "World"], "params": { "multi_line": true } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Lines after variable substitution; empty strings are skipped.
    pub lines: Vec<String>,
    /// Animation parameters; omitted fields take their defaults.
    #[serde(default)]
    pub params: GlobalParams,
}

impl RenderRequest {
    /// Parse a request from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TypelineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TypelineError::serde(format!("parse request JSON: {e}")))
    }

    /// Parse a request from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TypelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open request JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Boundary validation of the parameters.
    pub fn validate(&self) -> TypelineResult<()> {
        self.params.validate()
    }

    /// Validate, then compute the timelines.
    pub fn build(&self, oracle: &dyn WidthOracle) -> TypelineResult<TimelineSet> {
        self.validate()?;
        build_timelines(&self.lines, &self.params, oracle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/request.rs"]
mod tests;
