use serde::{Deserialize, Serialize};

/// Logging configuration. Log records go to `stderr`, `stdout` is reserved
/// for the plugin output.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Logging {
    /// Logging level. Possible values are: `Off`, `Error`, `Warn`, `Info`,
    /// `Debug` and `Trace`. Default is `Warn`.
    #[serde(default = "Logging::default_threshold")]
    pub threshold: Threshold,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

impl Logging {
    fn default_threshold() -> Threshold {
        Threshold::Warn
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A threshold lower than all security levels.
    Off,
    /// Corresponds to the `Error` security level.
    Error,
    /// Corresponds to the `Warn` security level.
    Warn,
    /// Corresponds to the `Info` security level.
    Info,
    /// Corresponds to the `Debug` security level.
    Debug,
    /// Corresponds to the `Trace` security level.
    Trace,
}

impl Threshold {
    /// Raises the threshold by `steps` levels, saturating at `Trace`.
    ///
    /// Used by the `-v` command line flag. The flag never lowers the
    /// configured threshold.
    #[must_use]
    pub fn raised_to_verbosity(self, verbosity: u8) -> Threshold {
        let requested = match verbosity {
            0 => return self,
            1 => Threshold::Info,
            2 => Threshold::Debug,
            _ => Threshold::Trace,
        };

        self.max(requested)
    }
}
