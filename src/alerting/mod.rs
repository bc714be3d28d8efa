//! Slack incoming-webhook alerts.
//!
//! When the probe does not end `OK` the whole plugin output is posted to the
//! configured channel. A failing webhook is only logged: alerting never
//! changes the status reported to the monitoring system.
use std::sync::Arc;
use std::time::Duration;

use cci_csw_probe_configuration::Alerting;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::nagios::{Status, Verdict};

const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build the HTTP client: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },
    #[error("The Slack webhook did not respond: {err}")]
    ResponseError { err: Arc<reqwest::Error> },
    #[error("The Slack webhook returned a non-success code: {code}")]
    UnsuccessfulResponse { code: StatusCode },
}

/// Incoming-webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
    pub text: String,
}

pub struct Slack {
    client: HttpClient,
    webhook_url: Url,
    channel: String,
    username: String,
    icon_emoji: String,
    notify_on_ok: bool,
}

impl Slack {
    /// A notifier for the configuration, or `None` when alerting is disabled
    /// or there is no webhook to post to.
    ///
    /// # Errors
    ///
    /// Will return an error if the HTTP client can not be built.
    pub fn from_config(config: &Alerting) -> Result<Option<Self>, Error> {
        if !config.enabled {
            return Ok(None);
        }

        let Some(webhook_url) = config.webhook_url.clone() else {
            tracing::warn!("Alerting is enabled but there is no webhook URL, alerts will not be sent");
            return Ok(None);
        };

        let client = HttpClient::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Some(Self {
            client,
            webhook_url,
            channel: config.channel.clone(),
            username: config.username.clone(),
            icon_emoji: config.icon_emoji.clone(),
            notify_on_ok: config.notify_on_ok,
        }))
    }

    #[must_use]
    pub fn should_notify(&self, status: Status) -> bool {
        status != Status::Ok || self.notify_on_ok
    }

    #[must_use]
    pub fn message(&self, verdict: &Verdict) -> Message {
        Message {
            channel: self.channel.clone(),
            username: self.username.clone(),
            icon_emoji: self.icon_emoji.clone(),
            text: verdict.to_string(),
        }
    }

    /// Posts the verdict when its status calls for it. Returns whether a
    /// message was sent.
    ///
    /// # Errors
    ///
    /// Will return an error if the webhook does not accept the message.
    pub async fn notify(&self, verdict: &Verdict) -> Result<bool, Error> {
        if !self.should_notify(verdict.status) {
            tracing::debug!(status = %verdict.status, "No alert needed");
            return Ok(false);
        }

        self.post(&self.message(verdict)).await?;

        tracing::info!(channel = %self.channel, status = %verdict.status, "Alert sent");

        Ok(true)
    }

    async fn post(&self, message: &Message) -> Result<(), Error> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| Error::ResponseError { err: e.into() })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::UnsuccessfulResponse {
                code: response.status(),
            })
        }
    }
}
