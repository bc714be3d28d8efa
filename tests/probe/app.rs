use std::time::Duration;

use cci_csw_probe::console::app::{run_with, Args};
use cci_csw_probe::console::logger::Logger;
use cci_csw_probe::nagios::Status;
use cci_csw_probe_test_helpers::fixtures;
use clap::Parser;

use crate::common::catalogue::{closed_endpoint, Behaviour, Environment};

fn args(arguments: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("cci_odp_csw_test").chain(arguments.iter().copied())).unwrap()
}

#[tokio::test]
async fn it_should_print_the_plugin_output_and_return_the_status() {
    let env = Environment::start(Behaviour::default()).await;

    let logger = Logger::new();

    let status = run_with(args(&["--endpoint", &env.endpoint()]), &logger).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(status.exit_code(), 0);
    assert_eq!(logger.log(), "CCI-CSW OK - 5 of 5 tests passed\n");

    env.stop();
}

#[tokio::test]
async fn it_should_only_run_the_selected_checks() {
    let env = Environment::start(Behaviour::default()).await;

    let logger = Logger::new();

    let status = run_with(args(&["--endpoint", &env.endpoint(), "cors", "search_results"]), &logger).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(logger.log(), "CCI-CSW OK - 2 of 2 tests passed\n");
    assert_eq!(env.requests().len(), 2);

    env.stop();
}

#[tokio::test]
async fn it_should_print_the_report_as_json_when_asked_to() {
    let env = Environment::start(Behaviour::default()).await;

    let logger = Logger::new();

    run_with(args(&["--endpoint", &env.endpoint(), "--json", "cors"]), &logger).await;

    let output = logger.log();
    let (first_line, json) = output.split_once('\n').unwrap();

    assert_eq!(first_line, "CCI-CSW OK - 1 of 1 tests passed");

    let json: serde_json::Value = serde_json::from_str(json).unwrap();

    assert_eq!(json["verdict"]["status"], "OK");
    assert_eq!(json["report"]["runs"][0]["check"], "cors");
    assert_eq!(json["report"]["runs"][0]["result"], "pass");

    env.stop();
}

#[tokio::test]
async fn it_should_rate_the_whole_catalogue_as_one_group_by_default() {
    let env = Environment::start(Behaviour {
        records: fixtures::RECORDS_RESPONSE_WITHOUT_EXTENTS.to_string(),
        ..Behaviour::default()
    })
    .await;

    let logger = Logger::new();

    let status = run_with(args(&["--endpoint", &env.endpoint()]), &logger).await;

    assert_eq!(status, Status::Warning);
    assert!(logger
        .log()
        .starts_with("CCI-CSW WARNING - 2 of 5 tests failed: temporal_extent, geographic_extent\n"));

    env.stop();
}

#[tokio::test]
async fn a_named_check_that_fails_should_make_the_run_critical() {
    let env = Environment::start(Behaviour {
        records: fixtures::RECORDS_RESPONSE_WITHOUT_EXTENTS.to_string(),
        ..Behaviour::default()
    })
    .await;

    let logger = Logger::new();

    let status = run_with(
        args(&["--endpoint", &env.endpoint(), "temporal_extent", "dashboard_query"]),
        &logger,
    )
    .await;

    assert_eq!(status, Status::Critical);
    assert!(logger
        .log()
        .starts_with("CCI-CSW CRITICAL - 1 of 2 tests failed: temporal_extent\n"));

    env.stop();
}

#[tokio::test]
async fn it_should_report_unknown_when_the_checks_take_longer_than_the_timeout() {
    let env = Environment::start(Behaviour {
        delay: Duration::from_secs(5),
        ..Behaviour::default()
    })
    .await;

    let logger = Logger::new();

    let status = run_with(args(&["--endpoint", &env.endpoint(), "--timeout", "1"]), &logger).await;

    assert_eq!(status, Status::Unknown);
    assert_eq!(status.exit_code(), 3);
    assert!(logger
        .log()
        .starts_with("CCI-CSW UNKNOWN - checks did not finish within 1 seconds"));

    env.stop();
}

#[tokio::test]
async fn a_failing_alert_should_not_change_the_status() {
    let env = Environment::start(Behaviour {
        records: fixtures::RECORDS_RESPONSE_WITHOUT_EXTENTS.to_string(),
        ..Behaviour::default()
    })
    .await;

    let logger = Logger::new();

    let status = run_with(
        args(&[
            "--endpoint",
            &env.endpoint(),
            "--slack-webhook-url",
            &closed_endpoint().await,
        ]),
        &logger,
    )
    .await;

    assert_eq!(status, Status::Warning);
    assert!(logger.log().starts_with("CCI-CSW WARNING - "));

    env.stop();
}

#[tokio::test]
async fn it_should_alert_slack_when_a_check_fails() {
    let env = Environment::start(Behaviour {
        records: fixtures::RECORDS_RESPONSE_WITHOUT_EXTENTS.to_string(),
        ..Behaviour::default()
    })
    .await;

    let logger = Logger::new();

    let status = run_with(
        args(&[
            "--endpoint",
            &env.endpoint(),
            "--slack-webhook-url",
            &env.slack_webhook_url(),
            "--slack-channel",
            "ops",
            "temporal_extent",
            "dashboard_query",
        ]),
        &logger,
    )
    .await;

    assert_eq!(status, Status::Critical);
    assert_eq!(status.exit_code(), 2);

    let alerts = env.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["channel"], "ops");
    assert_eq!(alerts[0]["text"], logger.log().trim_end());

    env.stop();
}

#[tokio::test]
async fn it_should_not_alert_slack_when_every_check_passes() {
    let env = Environment::start(Behaviour::default()).await;

    let logger = Logger::new();

    let status = run_with(
        args(&["--endpoint", &env.endpoint(), "--slack-webhook-url", &env.slack_webhook_url()]),
        &logger,
    )
    .await;

    assert_eq!(status, Status::Ok);
    assert!(env.alerts().is_empty());

    env.stop();
}
