//! Program to check the CCI Open Data Portal CSW catalogue.
//!
//! Run every check against the default catalogue:
//!
//! ```text
//! cargo run --bin cci_odp_csw_test
//! ```
//!
//! Run some checks against another endpoint, alerting to Slack:
//!
//! ```text
//! CCI_CSW_PROBE_SLACK_WEBHOOK_URL="https://hooks.slack.com/services/..." \
//!     cargo run --bin cci_odp_csw_test -- --endpoint "https://csw.example.org/csw" temporal_extent cors
//! ```
//!
//! Run providing a config file path:
//!
//! ```text
//! cargo run --bin cci_odp_csw_test -- --config-path "./share/default/config/csw_probe.toml"
//! CCI_CSW_PROBE_CONFIG_TOML_PATH="./share/default/config/csw_probe.toml" cargo run --bin cci_odp_csw_test
//! ```
//!
//! The first line of the output and the exit code follow the Nagios plugin
//! conventions, see [`crate::nagios`].
use std::time::Duration;

use anyhow::{Context as _, Result};
use cci_csw_probe_configuration::{Configuration, CHECK_NAME};
use clap::{ArgAction, Parser, ValueEnum};
use url::Url;

use super::printer::Printer;
use super::stdout::Console;
use crate::alerting::Slack;
use crate::bootstrap::config::initialize_configuration;
use crate::bootstrap::logging::{self, TraceStyle};
use crate::checks::{self, Check, Report};
use crate::csw;
use crate::nagios::{Status, Verdict};

/// Default for the `--timeout` option, in seconds.
const DEFAULT_OVERALL_TIMEOUT_SEC: u64 = 50;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Checks to run. All of them when none is given. Each argument is rated
    /// on its own and the worst status is reported.
    #[arg(value_enum)]
    checks: Vec<CheckName>,

    /// Path to the TOML configuration file.
    #[arg(short, long, env = "CCI_CSW_PROBE_CONFIG_TOML_PATH")]
    config_path: Option<String>,

    /// CSW endpoint, overrides the configured one.
    #[arg(long)]
    endpoint: Option<Url>,

    /// Seconds the whole run may take before giving up with UNKNOWN.
    #[arg(short, long, default_value_t = DEFAULT_OVERALL_TIMEOUT_SEC)]
    timeout: u64,

    /// Slack incoming webhook. Giving it enables alerting.
    #[arg(long, env = "CCI_CSW_PROBE_SLACK_WEBHOOK_URL", hide_env_values = true)]
    slack_webhook_url: Option<Url>,

    /// Slack channel receiving the alerts.
    #[arg(long)]
    slack_channel: Option<String>,

    /// User name the alerts are posted with.
    #[arg(long)]
    slack_user: Option<String>,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = TraceStyle::Default)]
    log_style: TraceStyle,

    /// Also print the report as JSON after the plugin output.
    #[arg(long)]
    json: bool,

    /// Print the check names and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum CheckName {
    /// Every check.
    All,
    DashboardQuery,
    TemporalExtent,
    GeographicExtent,
    SearchResults,
    Cors,
}

impl CheckName {
    fn checks(self) -> Vec<Check> {
        match self {
            CheckName::All => Check::ALL.to_vec(),
            CheckName::DashboardQuery => vec![Check::DashboardQuery],
            CheckName::TemporalExtent => vec![Check::TemporalExtent],
            CheckName::GeographicExtent => vec![Check::GeographicExtent],
            CheckName::SearchResults => vec![Check::SearchResults],
            CheckName::Cors => vec![Check::Cors],
        }
    }
}

/// Runs the probe with the process arguments and prints to the standard
/// output.
pub async fn run() -> Status {
    let args = Args::parse();

    run_with(args, &Console::new()).await
}

/// Runs the probe. Returns the status whose exit code the process should
/// end with.
pub async fn run_with<P: Printer>(args: Args, printer: &P) -> Status {
    if args.list {
        for check in Check::ALL {
            printer.println(check.name());
        }
        return Status::Ok;
    }

    let config = match setup_config(&args) {
        Ok(config) => config,
        Err(err) => {
            let verdict = Verdict::unknown(CHECK_NAME, &format!("{err:#}"));
            printer.println(&verdict.to_string());
            return verdict.status;
        }
    };

    logging::setup(
        config.logging.threshold.raised_to_verbosity(args.verbose),
        &args.log_style,
    );

    let groups = groups(&args.checks);
    let selection = selection(&groups);
    let overall_timeout = Duration::from_secs(args.timeout);

    let (verdict, report) = match probe(&config, &selection, overall_timeout).await {
        Ok(report) => (Verdict::from_groups(CHECK_NAME, &report, &groups), Some(report)),
        Err(err) => {
            tracing::error!("{err:#}");
            (Verdict::unknown(CHECK_NAME, &format!("{err:#}")), None)
        }
    };

    printer.println(&verdict.to_string());

    if args.json {
        let json_output = serde_json::json!({ "verdict": verdict, "report": report });
        match serde_json::to_string_pretty(&json_output) {
            Ok(json) => printer.println(&json),
            Err(err) => tracing::error!("Failed to serialize the report: {err}"),
        }
    }

    alert(&config, &verdict).await;

    verdict.status
}

fn setup_config(args: &Args) -> Result<Configuration> {
    let mut config = initialize_configuration(args.config_path.clone()).context("invalid configuration")?;

    if let Some(endpoint) = &args.endpoint {
        config.csw.endpoint = endpoint.clone();
    }

    if let Some(webhook_url) = &args.slack_webhook_url {
        config.alerting.enabled = true;
        config.alerting.webhook_url = Some(webhook_url.clone());
    }

    if let Some(channel) = &args.slack_channel {
        config.alerting.channel.clone_from(channel);
    }

    if let Some(user) = &args.slack_user {
        config.alerting.username.clone_from(user);
    }

    config.validate().context("invalid command line options")?;

    if args.timeout == 0 {
        anyhow::bail!("the timeout must be greater than zero");
    }

    Ok(config)
}

/// One group of checks per argument, the whole catalogue when there is none.
fn groups(names: &[CheckName]) -> Vec<Vec<Check>> {
    if names.is_empty() {
        return vec![Check::ALL.to_vec()];
    }

    names.iter().map(|name| name.checks()).collect()
}

/// Every check of the groups, once, in the order first asked for.
fn selection(groups: &[Vec<Check>]) -> Vec<Check> {
    let requested: Vec<Check> = groups.iter().flatten().copied().collect();

    checks::dedup(&requested)
}

async fn probe(config: &Configuration, selection: &[Check], overall_timeout: Duration) -> Result<Report> {
    let client = csw::Client::new(config.csw.endpoint.clone(), config.csw.timeout()).context("can't build the CSW client")?;

    let context = checks::Context {
        client,
        origin: config.csw.origin.clone(),
        search_term: config.csw.search_term.clone(),
    };

    tokio::time::timeout(overall_timeout, checks::run(selection, &context))
        .await
        .with_context(|| format!("checks did not finish within {} seconds", overall_timeout.as_secs()))
}

async fn alert(config: &Configuration, verdict: &Verdict) {
    match Slack::from_config(&config.alerting) {
        Ok(Some(slack)) => {
            if let Err(err) = slack.notify(verdict).await {
                tracing::error!("Failed to send the alert: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => tracing::error!("Failed to set up alerting: {err}"),
    }
}
