use serde::{Deserialize, Serialize};
use url::Url;

/// Slack incoming-webhook alerting.
///
/// Alerts are only sent when `enabled` is `true` and a `webhook_url` is set.
/// The webhook URL is a secret, so it is usually injected with the
/// `CCI_CSW_PROBE_ALERTING__WEBHOOK_URL` environment variable or the
/// `--slack-webhook-url` option rather than written in the config file.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Alerting {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<Url>,

    #[serde(default = "Alerting::default_channel")]
    pub channel: String,

    #[serde(default = "Alerting::default_username")]
    pub username: String,

    #[serde(default = "Alerting::default_icon_emoji")]
    pub icon_emoji: String,

    /// Also post a message when every check passed.
    #[serde(default)]
    pub notify_on_ok: bool,
}

impl Default for Alerting {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook_url: None,
            channel: Self::default_channel(),
            username: Self::default_username(),
            icon_emoji: Self::default_icon_emoji(),
            notify_on_ok: false,
        }
    }
}

impl Alerting {
    fn default_channel() -> String {
        String::from("cci-odp-ops-logging")
    }

    fn default_username() -> String {
        String::from("cci-ops-test")
    }

    fn default_icon_emoji() -> String {
        String::from(":satellite:")
    }
}
