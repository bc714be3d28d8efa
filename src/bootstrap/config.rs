//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `CCI_CSW_PROBE_`.
use cci_csw_probe_configuration::{Configuration, Error, Info};

/// It loads the probe configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `csw_probe.toml`. Its path can be given with
///    `--config-path` or `CCI_CSW_PROBE_CONFIG_TOML_PATH`.
/// 2. Environment variable: `CCI_CSW_PROBE_CONFIG_TOML`. The variable
///    contains the same contents as the `csw_probe.toml` file.
///
/// Environment variable has priority over the config file. Single values can
/// still be overridden with `CCI_CSW_PROBE_<SECTION>__<FIELD>`.
///
/// # Errors
///
/// Will return an error if the configuration can not be loaded or is not
/// valid.
pub fn initialize_configuration(config_toml_path: Option<String>) -> Result<Configuration, Error> {
    let info = Info::new(config_toml_path);

    Configuration::load(&info)
}
