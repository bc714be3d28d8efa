use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::DEFAULT_TIMEOUT;

/// The catalogue under test and the values the checks send to it.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Csw {
    /// The CSW endpoint receiving the `GetRecords` POST requests.
    #[serde(default = "Csw::default_endpoint")]
    pub endpoint: Url,

    /// Timeout in seconds for each HTTP request.
    #[serde(default = "Csw::default_timeout")]
    pub timeout: u64,

    /// The `Origin` sent by the CORS check. The service must echo it (or `*`)
    /// in `Access-Control-Allow-Origin`.
    #[serde(default = "Csw::default_origin")]
    pub origin: String,

    /// Free text searched by the search results check. The catalogue must
    /// have at least one record matching it.
    #[serde(default = "Csw::default_search_term")]
    pub search_term: String,
}

impl Default for Csw {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Self::default_timeout(),
            origin: Self::default_origin(),
            search_term: Self::default_search_term(),
        }
    }
}

impl Csw {
    fn default_endpoint() -> Url {
        Url::parse("https://csw.ceda.ac.uk/geonetwork/srv/eng/csw-CEDA-CCI").expect("it should be a valid URL")
    }

    fn default_timeout() -> u64 {
        DEFAULT_TIMEOUT.as_secs()
    }

    fn default_origin() -> String {
        String::from("https://climate.esa.int")
    }

    fn default_search_term() -> String {
        String::from("sea ice")
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
