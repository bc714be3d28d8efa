//! Testing helpers for the CCI Open Data Portal CSW probe.
pub mod configuration;
pub mod fixtures;
