//! CLI tool to estimate AQI along a route.
//!
//! Samples the route at a fixed interval, estimates every sample and prints
//! the per-point results together with the route summary.
//!
//! Usage:
//!   cargo run -p aqi-cli --bin estimate_route -- --stations stations.json --route route.json

use anyhow::Result;
use aqi_cli::io::{load_route, load_stations, print_json};
use aqi_cli::{init_tracing, Config, OptionArgs};
use aqi_core::estimate_along_route;
use clap::Parser;
use std::path::PathBuf;

/// Estimate AQI along a route
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Station feed (JSON array of station records)
    #[arg(long)]
    stations: PathBuf,

    /// Route (JSON array of [lat, lon] pairs)
    #[arg(long)]
    route: PathBuf,

    /// Sample spacing in meters (env: AQI_SAMPLE_INTERVAL_M)
    #[arg(long)]
    interval: Option<f64>,

    /// Print only the route summary
    #[arg(long, default_value_t = false)]
    summary_only: bool,

    #[command(flatten)]
    options: OptionArgs,
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let config = Config::from_env();
    let options = args.options.resolve(&config.options)?;
    let interval_m = config.sample_interval(args.interval)?;

    let stations = load_stations(&args.stations)?;
    let route = load_route(&args.route)?;
    if route.len() < 2 {
        tracing::warn!(vertices = route.len(), "Route needs at least 2 vertices");
    }

    let report = estimate_along_route(&route, interval_m, &stations, &options);
    if args.summary_only {
        print_json(&report.aggregate, args.options.pretty)
    } else {
        print_json(&report, args.options.pretty)
    }
}
