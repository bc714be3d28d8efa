//! Configuration data structures for the CCI Open Data Portal CSW probe.
//!
//! The probe can be configured with a TOML file, with the whole TOML content
//! in an environment variable, or with individual environment variables that
//! override single values:
//!
//! ```text
//! CCI_CSW_PROBE_CSW__ENDPOINT="https://csw.example.org/csw" cci_odp_csw_test
//! ```
//!
//! Every value has a default, so the probe runs without any configuration at
//! all against the production catalogue.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Default timeout for each HTTP request sent to the catalogue.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Name reported in the first line of the plugin output.
pub const CHECK_NAME: &str = "CCI-CSW";

// Environment variables

/// The whole `csw_probe.toml` file content. It has priority over the config file.
pub const ENV_VAR_CONFIG_TOML: &str = "CCI_CSW_PROBE_CONFIG_TOML";

/// The `csw_probe.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "CCI_CSW_PROBE_CONFIG_TOML_PATH";

/// Prefix for environment variables overriding single values. Nested keys are
/// separated with a double underscore: `CCI_CSW_PROBE_ALERTING__CHANNEL`.
pub const ENV_VAR_PREFIX: &str = "CCI_CSW_PROBE_";

/// Location used when no path is given.
pub const DEFAULT_CONFIG_TOML_PATH: &str = "./share/default/config/csw_probe.toml";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type Csw = v1::csw::Csw;
pub type Alerting = v1::alerting::Alerting;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
    explicit_path: bool,
}

impl Info {
    /// Build Configuration Info.
    ///
    /// The TOML content in [`ENV_VAR_CONFIG_TOML`] wins over any file. When
    /// `config_toml_path` is `None` the [`DEFAULT_CONFIG_TOML_PATH`] is used,
    /// and it is fine for that file not to exist.
    #[must_use]
    pub fn new(config_toml_path: Option<String>) -> Self {
        let config_toml = env::var(ENV_VAR_CONFIG_TOML).ok();

        let (config_toml_path, explicit_path) = match config_toml_path {
            Some(path) => (path, true),
            None => (DEFAULT_CONFIG_TOML_PATH.to_string(), false),
        };

        Self {
            config_toml,
            config_toml_path,
            explicit_path,
        }
    }

    /// Info for a configuration given directly as TOML content.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_string()),
            config_toml_path: DEFAULT_CONFIG_TOML_PATH.to_string(),
            explicit_path: false,
        }
    }

    #[must_use]
    pub fn config_toml_path(&self) -> &str {
        &self.config_toml_path
    }

    fn missing_explicit_file(&self) -> bool {
        self.config_toml.is_none() && self.explicit_path && !Path::new(&self.config_toml_path).exists()
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file given on the command line (or in
    /// `CCI_CSW_PROBE_CONFIG_TOML_PATH`) does not exist.
    #[error("Configuration file not found: {path}")]
    MissingConfigFile { path: String },

    /// Unable to merge or extract the configuration sources.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: Box<figment::Error> },

    #[error("Invalid {field} URL, only http and https are supported, got: {url}")]
    UnsupportedUrlScheme { field: &'static str, url: String },

    #[error("The CSW request timeout must be greater than zero")]
    ZeroTimeout,
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Box::new(err) }
    }
}
