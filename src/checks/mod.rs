//! The checks run against the catalogue.
//!
//! | Check | Expectation |
//! |---|---|
//! | [`Check::DashboardQuery`] | the dashboard query gets a `GetRecordsResponse` |
//! | [`Check::TemporalExtent`] | records have a `gml:TimePeriod` with begin and end positions |
//! | [`Check::GeographicExtent`] | records have a bounding box with west and south bounds |
//! | [`Check::SearchResults`] | a free text search has at least one hit |
//! | [`Check::Cors`] | the service allows cross-origin requests |
//!
//! Every check sends its own request, so one check never depends on another.
mod catalogue;
pub mod report;

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use url::Url;

pub use self::report::{Report, Run};
use crate::csw;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    DashboardQuery,
    TemporalExtent,
    GeographicExtent,
    SearchResults,
    Cors,
}

impl Check {
    /// The whole catalogue, in running order.
    pub const ALL: [Check; 5] = [
        Check::DashboardQuery,
        Check::TemporalExtent,
        Check::GeographicExtent,
        Check::SearchResults,
        Check::Cors,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Check::DashboardQuery => "dashboard_query",
            Check::TemporalExtent => "temporal_extent",
            Check::GeographicExtent => "geographic_extent",
            Check::SearchResults => "search_results",
            Check::Cors => "cors",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "message", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    /// An expectation did not hold.
    Fail(String),
    /// The check could not be evaluated.
    Error(String),
}

impl Outcome {
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(message) | Outcome::Error(message) => Some(message),
        }
    }
}

/// What the checks need to run.
pub struct Context {
    pub client: csw::Client,
    /// Sent in the `Origin` header by the CORS check.
    pub origin: String,
    /// Searched by the search results check.
    pub search_term: String,
}

impl Context {
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        self.client.endpoint()
    }
}

/// Removes repeated checks keeping the first occurrence.
#[must_use]
pub fn dedup(checks: &[Check]) -> Vec<Check> {
    let mut unique: Vec<Check> = Vec::with_capacity(checks.len());

    for check in checks {
        if !unique.contains(check) {
            unique.push(*check);
        }
    }

    unique
}

/// Runs the checks one after the other.
pub async fn run(checks: &[Check], context: &Context) -> Report {
    let mut report = Report::new(context.endpoint().clone());

    tracing::info!("Running {} check(s) against {} ...", checks.len(), context.endpoint());

    for &check in checks {
        let started = Instant::now();

        let outcome = catalogue::run(check, context).await;

        match &outcome {
            Outcome::Pass => tracing::info!(%check, "pass"),
            Outcome::Fail(message) => tracing::warn!(%check, %message, "fail"),
            Outcome::Error(message) => tracing::error!(%check, %message, "error"),
        }

        report.push(Run {
            check,
            outcome,
            elapsed: started.elapsed(),
        });
    }

    report
}
