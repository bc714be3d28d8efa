//! Version `1` of the CSW probe configuration data structures.
//!
//! Sections:
//!
//! - [`logging`]: log threshold.
//! - [`csw`]: the catalogue endpoint and the values sent by the checks.
//! - [`alerting`]: Slack incoming-webhook notifications.
//!
//! The default configuration is:
//!
//! ```toml
//! [logging]
//! threshold = "warn"
//!
//! [csw]
//! endpoint = "https://csw.ceda.ac.uk/geonetwork/srv/eng/csw-CEDA-CCI"
//! timeout = 10
//! origin = "https://climate.esa.int"
//! search_term = "sea ice"
//!
//! [alerting]
//! enabled = false
//! channel = "cci-odp-ops-logging"
//! username = "cci-ops-test"
//! icon_emoji = ":satellite:"
//! notify_on_ok = false
//! ```
pub mod alerting;
pub mod csw;
pub mod logging;

use std::fs;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

use self::alerting::Alerting;
use self::csw::Csw;
use self::logging::Logging;
use crate::{Error, Info, ENV_VAR_PREFIX};

/// Core configuration for the probe.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub logging: Logging,

    #[serde(default)]
    pub csw: Csw,

    #[serde(default)]
    pub alerting: Alerting,
}

impl Configuration {
    /// Loads the configuration.
    ///
    /// Sources, from lowest to highest priority:
    ///
    /// 1. Default values.
    /// 2. The TOML content in `info`, or else the TOML file it points to.
    /// 3. `CCI_CSW_PROBE_<SECTION>__<FIELD>` environment variables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if an explicitly given file does not exist, a source
    /// has a bad format or the resulting configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        if info.missing_explicit_file() {
            return Err(Error::MissingConfigFile {
                path: info.config_toml_path.clone(),
            });
        }

        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = match &info.config_toml {
            Some(config_toml) => figment.merge(Toml::string(config_toml)),
            None => figment.merge(Toml::file(&info.config_toml_path)),
        };

        let config: Configuration = figment
            .merge(
                Env::prefixed(ENV_VAR_PREFIX)
                    .ignore(&["config_toml", "config_toml_path", "slack_webhook_url"])
                    .split("__"),
            )
            .extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Checks the values serde can not check on its own.
    ///
    /// # Errors
    ///
    /// Will return `Err` if an URL is not `http(s)` or the timeout is zero.
    pub fn validate(&self) -> Result<(), Error> {
        check_http_scheme("CSW endpoint", &self.csw.endpoint)?;

        if let Some(webhook_url) = &self.alerting.webhook_url {
            check_http_scheme("alerting webhook", webhook_url)?;
        }

        if self.csw.timeout == 0 {
            return Err(Error::ZeroTimeout);
        }

        Ok(())
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file can not be written.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration can not be encoded to TOML.
    pub fn save_to_file(&self, path: &str) -> Result<(), std::io::Error> {
        fs::write(path, self.to_toml())
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration can not be encoded to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}

fn check_http_scheme(field: &'static str, url: &Url) -> Result<(), Error> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(Error::UnsupportedUrlScheme {
            field,
            url: url.to_string(),
        }),
    }
}
