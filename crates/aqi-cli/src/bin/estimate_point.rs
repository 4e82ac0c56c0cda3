//! CLI tool to estimate AQI at a single coordinate.
//!
//! Usage:
//!   cargo run -p aqi-cli --bin estimate_point -- --stations stations.json --lat 3.14 --lon 101.69

use anyhow::Result;
use aqi_cli::io::{load_stations, print_json};
use aqi_cli::{init_tracing, Config, OptionArgs};
use aqi_core::{estimate, Coordinate};
use clap::Parser;
use std::path::PathBuf;

/// Estimate AQI at a point from the nearest stations
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Station feed (JSON array of station records)
    #[arg(long)]
    stations: PathBuf,

    /// Target latitude
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Target longitude
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    #[command(flatten)]
    options: OptionArgs,
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let config = Config::from_env();
    let options = args.options.resolve(&config.options)?;
    let stations = load_stations(&args.stations)?;

    let result = estimate(Coordinate::new(args.lat, args.lon), &stations, &options);
    match result.value() {
        Some(value) => tracing::info!(
            value,
            confidence = result.confidence,
            stations_used = result.stations_used,
            "Estimated AQI"
        ),
        None => tracing::warn!(reason = ?result.message(), "No AQI estimate"),
    }

    print_json(&result, args.options.pretty)
}
