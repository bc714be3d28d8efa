use cci_csw_probe::alerting::{Error, Slack};
use cci_csw_probe::nagios::{Status, Verdict};
use cci_csw_probe_configuration::Alerting;
use url::Url;

use crate::common::catalogue::{closed_endpoint, Behaviour, Environment};

fn alerting(webhook_url: &str) -> Alerting {
    Alerting {
        enabled: true,
        webhook_url: Some(Url::parse(webhook_url).unwrap()),
        ..Alerting::default()
    }
}

fn critical() -> Verdict {
    Verdict {
        name: "CCI-CSW".to_string(),
        status: Status::Critical,
        summary: "1 of 1 tests failed: dashboard_query".to_string(),
        details: vec!["dashboard_query: ERROR - No response".to_string()],
    }
}

#[tokio::test]
async fn it_should_post_the_verdict_to_the_webhook() {
    let env = Environment::start(Behaviour::default()).await;

    let slack = Slack::from_config(&alerting(&env.slack_webhook_url())).unwrap().unwrap();

    let sent = slack.notify(&critical()).await.unwrap();

    assert!(sent);
    assert_eq!(
        env.alerts(),
        vec![serde_json::json!({
            "channel": "cci-odp-ops-logging",
            "username": "cci-ops-test",
            "icon_emoji": ":satellite:",
            "text": "CCI-CSW CRITICAL - 1 of 1 tests failed: dashboard_query\ndashboard_query: ERROR - No response"
        })]
    );

    env.stop();
}

#[tokio::test]
async fn it_should_return_an_error_when_the_webhook_rejects_the_message() {
    let env = Environment::start(Behaviour::default()).await;

    let slack = Slack::from_config(&alerting(&format!("http://{}/not_a_webhook", env.addr)))
        .unwrap()
        .unwrap();

    let result = slack.notify(&critical()).await;

    assert!(matches!(result, Err(Error::UnsuccessfulResponse { .. })));

    env.stop();
}

#[tokio::test]
async fn it_should_return_an_error_when_the_webhook_is_unreachable() {
    let slack = Slack::from_config(&alerting(&closed_endpoint().await)).unwrap().unwrap();

    let result = slack.notify(&critical()).await;

    assert!(matches!(result, Err(Error::ResponseError { .. })));
}
