//! Nagios-style probe for the CCI Open Data Portal CSW catalogue.
//!
//! The probe sends a few fixed `GetRecords` queries to a CSW (Catalogue
//! Service for the Web) endpoint and checks the answers:
//!
//! - the response is a `csw:GetRecordsResponse`;
//! - records carry temporal extents (`gml:TimePeriod`);
//! - records carry geographic extents (`gmd:EX_GeographicBoundingBox`);
//! - a free text search has hits;
//! - cross-origin requests are allowed.
//!
//! The outcomes are folded into a single `OK`, `WARNING` or `CRITICAL`
//! status (see [`nagios`]) and, when something is wrong, posted to a Slack
//! channel (see [`alerting`]).
//!
//! ```text
//! $ cci_odp_csw_test
//! CCI-CSW WARNING - 1 of 5 tests failed: temporal_extent
//! temporal_extent: FAIL - No temporal end elements found for "https://csw.ceda.ac.uk/geonetwork/srv/eng/csw-CEDA-CCI"
//! $ echo $?
//! 1
//! ```
pub mod alerting;
pub mod bootstrap;
pub mod checks;
pub mod console;
pub mod csw;
pub mod nagios;
