//! AQI CLI - Command line tools for AQI point and route estimation.
//!
//! This crate provides the CLI binaries:
//! - estimate_point: AQI estimate at a single coordinate
//! - estimate_route: AQI estimates along a sampled route plus a summary
//! - demo_route: route estimate over synthetic stations

pub mod config;
pub mod io;
pub mod logging;
pub mod synthetic;

pub use config::{Config, OptionArgs};
pub use logging::init_tracing;
