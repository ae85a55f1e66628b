//! Batch plotter for solver monitor files.
//!
//! Reads every `*.out` file of a directory, draws all histories on one chart
//! coloured along a spectral map, and writes the last value of each to a
//! tab-delimited table.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod render;

pub use app::{RunReport, run};
pub use config::RunConfig;
