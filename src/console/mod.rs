//! Console entry point of the probe.
pub mod app;
pub mod logger;
pub mod printer;
pub mod stdout;
