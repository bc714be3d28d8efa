use cci_csw_probe_configuration::{Configuration, Threshold};
use url::Url;

/// This configuration is used for testing. Logging is off, the request
/// timeout is short and alerting is disabled.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `Debug` for tests debugging

    config.csw.timeout = 2;

    config.alerting.enabled = false;
    config.alerting.webhook_url = None;

    config
}

/// Ephemeral configuration pointing the checks to `endpoint`, usually a mock
/// catalogue bound to a local ephemeral port.
///
/// # Panics
///
/// Will panic if `endpoint` is not a valid URL.
#[must_use]
pub fn ephemeral_with_endpoint(endpoint: &str) -> Configuration {
    let mut config = ephemeral();

    config.csw.endpoint = Url::parse(endpoint).expect("the test endpoint should be a valid URL");

    config
}
