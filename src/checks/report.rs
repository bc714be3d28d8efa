use std::time::Duration;

use serde::{Serialize, Serializer};
use url::Url;

use super::{Check, Outcome};

/// One check execution.
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    pub check: Check,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

/// The outcome of every check run against one endpoint, in running order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    endpoint: Url,
    runs: Vec<Run>,
}

impl Report {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            runs: Vec::default(),
        }
    }

    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    #[must_use]
    pub fn tests_run(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.runs.iter().filter(|run| matches!(run.outcome, Outcome::Fail(_))).count()
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.runs.iter().filter(|run| matches!(run.outcome, Outcome::Error(_))).count()
    }

    /// Failures plus errors.
    #[must_use]
    pub fn problems(&self) -> usize {
        self.failures() + self.errors()
    }

    /// A report with only the runs of `checks`, in running order.
    #[must_use]
    pub fn subset(&self, checks: &[Check]) -> Report {
        Self {
            endpoint: self.endpoint.clone(),
            runs: self.runs.iter().filter(|run| checks.contains(&run.check)).cloned().collect(),
        }
    }

    /// The runs that did not pass.
    #[must_use]
    pub fn problem_runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().filter(|run| !run.outcome.is_pass())
    }
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
