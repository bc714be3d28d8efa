//! Nagios-style plugin result.
//!
//! A monitoring system runs the probe and reads two things:
//!
//! - the exit code: `0` OK, `1` WARNING, `2` CRITICAL, `3` UNKNOWN;
//! - the first line of `stdout`: `<NAME> <STATUS> - <summary>`, optionally
//!   followed by more lines with details.
//!
//! The status of a run is decided by [`evaluate`]:
//!
//! | Checks not passing | Status |
//! |---|---|
//! | none | `OK` |
//! | some | `WARNING` |
//! | all (or no check run at all) | `CRITICAL` |
//!
//! When the checks are asked for in groups (one per command line argument)
//! each group is rated on its own and the worst status wins, see
//! [`evaluate_groups`].
//!
//! `UNKNOWN` is reserved for problems of the probe itself, like a bad
//! configuration.
use std::fmt;

use serde::Serialize;

use crate::checks::{Check, Outcome, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the outcomes of a run onto a status.
#[must_use]
pub fn evaluate(report: &Report) -> Status {
    let problems = report.problems();

    if report.tests_run() == problems {
        Status::Critical
    } else if problems > 0 {
        Status::Warning
    } else {
        Status::Ok
    }
}

/// The worst status among the groups, each rated with [`evaluate`] on its
/// own runs. Without groups the whole report is one group.
#[must_use]
pub fn evaluate_groups(report: &Report, groups: &[Vec<Check>]) -> Status {
    groups
        .iter()
        .map(|group| evaluate(&report.subset(group)))
        .max()
        .unwrap_or_else(|| evaluate(report))
}

/// Status plus the text shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub name: String,
    pub status: Status,
    pub summary: String,
    pub details: Vec<String>,
}

impl Verdict {
    #[must_use]
    pub fn from_report(name: &str, report: &Report) -> Self {
        Self::with_status(name, report, evaluate(report))
    }

    /// Like [`Verdict::from_report`] but rated with [`evaluate_groups`].
    #[must_use]
    pub fn from_groups(name: &str, report: &Report, groups: &[Vec<Check>]) -> Self {
        Self::with_status(name, report, evaluate_groups(report, groups))
    }

    fn with_status(name: &str, report: &Report, status: Status) -> Self {
        let tests_run = report.tests_run();

        let summary = if tests_run == 0 {
            "no tests were run".to_string()
        } else if status == Status::Ok {
            format!("{tests_run} of {tests_run} tests passed")
        } else {
            let names = report
                .problem_runs()
                .map(|run| run.check.name())
                .collect::<Vec<_>>()
                .join(", ");

            format!("{} of {tests_run} tests failed: {names}", report.problems())
        };

        let details = report
            .runs()
            .iter()
            .filter_map(|run| match &run.outcome {
                Outcome::Pass => None,
                Outcome::Fail(message) => Some(format!("{}: FAIL - {message}", run.check)),
                Outcome::Error(message) => Some(format!("{}: ERROR - {message}", run.check)),
            })
            .collect();

        Self {
            name: name.to_string(),
            status,
            summary,
            details,
        }
    }

    /// The probe could not run the checks.
    #[must_use]
    pub fn unknown(name: &str, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            status: Status::Unknown,
            summary: reason.to_string(),
            details: Vec::default(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.name, self.status, self.summary)?;

        for line in &self.details {
            write!(f, "\n{line}")?;
        }

        Ok(())
    }
}
