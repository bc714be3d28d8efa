use axum::http::StatusCode;
use cci_csw_probe::checks::{self, Check, Outcome};
use cci_csw_probe::nagios::{Status, Verdict};
use cci_csw_probe_test_helpers::{configuration, fixtures};

use super::context;
use crate::common::catalogue::{closed_endpoint, Behaviour, Cors, Environment};

#[tokio::test]
async fn a_healthy_catalogue_should_pass_every_check() {
    let env = Environment::start(Behaviour::default()).await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&Check::ALL, &context).await;

    let verdict = Verdict::from_report("CCI-CSW", &report);

    assert_eq!(verdict.status, Status::Ok);
    assert_eq!(verdict.to_string(), "CCI-CSW OK - 5 of 5 tests passed");
    assert_eq!(env.requests().len(), 5);

    env.stop();
}

#[tokio::test]
async fn the_search_should_send_the_configured_term() {
    let env = Environment::start(Behaviour::default()).await;

    let mut config = configuration::ephemeral_with_endpoint(&env.endpoint());
    config.csw.search_term = "ozone".to_string();

    let report = checks::run(&[Check::SearchResults], &context(&config)).await;

    assert!(report.runs()[0].outcome.is_pass());

    let requests = env.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("%ozone%"));
    assert!(requests[0].contains(r#"resultType="hits""#));

    env.stop();
}

#[tokio::test]
async fn records_without_extents_should_be_a_warning() {
    let env = Environment::start(Behaviour {
        records: fixtures::RECORDS_RESPONSE_WITHOUT_EXTENTS.to_string(),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&Check::ALL, &context).await;

    let verdict = Verdict::from_report("CCI-CSW", &report);

    assert_eq!(verdict.status, Status::Warning);
    assert_eq!(
        verdict.summary,
        "2 of 5 tests failed: temporal_extent, geographic_extent"
    );
    assert_eq!(
        verdict.details,
        vec![
            format!("temporal_extent: FAIL - No temporal start elements found for {:?}", env.endpoint()),
            format!(
                "geographic_extent: FAIL - No West Bound Longitude elements found in response {:?}",
                env.endpoint()
            ),
        ]
    );

    env.stop();
}

#[tokio::test]
async fn a_search_without_hits_should_fail() {
    let env = Environment::start(Behaviour {
        hits: fixtures::hits_response(0),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&[Check::SearchResults], &context).await;

    assert_eq!(report.failures(), 1);
    assert_eq!(Verdict::from_report("CCI-CSW", &report).status, Status::Critical);

    env.stop();
}

#[tokio::test]
async fn a_catalogue_without_cors_support_should_fail_the_cors_check_only() {
    let env = Environment::start(Behaviour {
        cors: Cors::Missing,
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&Check::ALL, &context).await;

    assert_eq!(
        report.problem_runs().map(|run| run.check).collect::<Vec<_>>(),
        vec![Check::Cors]
    );
    assert_eq!(Verdict::from_report("CCI-CSW", &report).status, Status::Warning);

    env.stop();
}

#[tokio::test]
async fn an_exception_report_should_fail_every_check_with_the_exception_text() {
    let env = Environment::start(Behaviour {
        status: StatusCode::SERVICE_UNAVAILABLE,
        records: fixtures::EXCEPTION_REPORT.to_string(),
        hits: fixtures::EXCEPTION_REPORT.to_string(),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&Check::ALL, &context).await;

    assert_eq!(report.failures(), 5);
    assert_eq!(Verdict::from_report("CCI-CSW", &report).status, Status::Critical);

    for run in report.runs() {
        let message = run.outcome.message().unwrap();
        assert!(message.starts_with("Expecting 200 OK response code"), "{message}");
        assert!(message.ends_with("Catalogue index is being rebuilt"), "{message}");
    }

    env.stop();
}

#[tokio::test]
async fn a_body_that_is_not_xml_should_be_an_error() {
    let env = Environment::start(Behaviour {
        records: fixtures::NOT_XML.to_string(),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&[Check::DashboardQuery], &context).await;

    let Outcome::Error(message) = &report.runs()[0].outcome else {
        panic!("it should be an error, got {:?}", report.runs()[0].outcome);
    };
    assert!(message.contains(&env.endpoint()), "{message}");

    env.stop();
}

#[tokio::test]
async fn an_error_status_without_an_exception_report_should_fail_naming_the_status() {
    let env = Environment::start(Behaviour {
        status: StatusCode::BAD_GATEWAY,
        records: fixtures::NOT_XML.to_string(),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&[Check::DashboardQuery], &context).await;

    assert_eq!(
        report.runs()[0].outcome,
        Outcome::Fail(format!(
            "Expecting 200 OK response code for {:?}, got 502 Bad Gateway",
            env.endpoint()
        ))
    );

    env.stop();
}

#[tokio::test]
async fn an_exception_report_with_a_success_status_should_fail_with_the_exception_text() {
    let env = Environment::start(Behaviour {
        records: fixtures::EXCEPTION_REPORT.to_string(),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&[Check::DashboardQuery], &context).await;

    let message = report.runs()[0].outcome.message().unwrap();
    assert!(
        message.starts_with("Expecting {http://www.opengis.net/cat/csw/2.0.2}GetRecordsResponse tag"),
        "{message}"
    );
    assert!(message.ends_with(": Catalogue index is being rebuilt"), "{message}");

    env.stop();
}

#[tokio::test]
async fn a_catalogue_allowing_any_origin_should_pass_the_cors_check() {
    let env = Environment::start(Behaviour {
        cors: Cors::Fixed("*"),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&[Check::Cors], &context).await;

    assert_eq!(report.runs()[0].outcome, Outcome::Pass);

    env.stop();
}

#[tokio::test]
async fn a_catalogue_allowing_another_origin_should_fail_the_cors_check() {
    let env = Environment::start(Behaviour {
        cors: Cors::Fixed("https://other.example.org"),
        ..Behaviour::default()
    })
    .await;

    let context = context(&configuration::ephemeral_with_endpoint(&env.endpoint()));

    let report = checks::run(&[Check::Cors], &context).await;

    let Outcome::Fail(message) = &report.runs()[0].outcome else {
        panic!("it should fail, got {:?}", report.runs()[0].outcome);
    };
    assert!(message.contains("https://other.example.org"), "{message}");
    assert!(message.contains(&env.endpoint()), "{message}");

    env.stop();
}

#[tokio::test]
async fn an_unreachable_catalogue_should_be_critical() {
    let context = context(&configuration::ephemeral_with_endpoint(&closed_endpoint().await));

    let report = checks::run(&Check::ALL, &context).await;

    assert_eq!(report.errors(), 5);
    assert_eq!(Verdict::from_report("CCI-CSW", &report).status, Status::Critical);
}
