//! Demo: route estimate over a synthetic station feed.
//!
//! Scatters stations around a centre point, builds a crossing route through
//! it and prints the route summary.
//!
//! Usage:
//!   cargo run -p aqi-cli --bin demo_route -- --seed 42

use anyhow::Result;
use aqi_cli::io::print_json;
use aqi_cli::synthetic::{crossing_route, random_stations, DEFAULT_CENTER};
use aqi_cli::{init_tracing, Config, OptionArgs};
use aqi_core::{estimate_along_route, Coordinate};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Route AQI estimate over synthetic stations
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Centre latitude (default: Kuala Lumpur)
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_CENTER.lat)]
    lat: f64,

    /// Centre longitude (default: Kuala Lumpur)
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_CENTER.lon)]
    lon: f64,

    /// Number of synthetic stations
    #[arg(long, default_value_t = 12)]
    station_count: usize,

    /// Scatter radius for stations in meters
    #[arg(long, default_value_t = 8_000.0)]
    radius: f64,

    /// Half-length of the route in meters
    #[arg(long, default_value_t = 5_000.0)]
    half_length: f64,

    /// RNG seed; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print every sampled point, not just the summary
    #[arg(long, default_value_t = false)]
    full: bool,

    #[command(flatten)]
    options: OptionArgs,
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let config = Config::from_env();
    let options = args.options.resolve(&config.options)?;
    let interval_m = config.sample_interval(None)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let center = Coordinate::new(args.lat, args.lon);
    let stations = random_stations(&mut rng, center, args.radius, args.station_count);
    let route = crossing_route(center, args.half_length);

    tracing::info!(
        stations = stations.len(),
        center = ?center,
        "Generated synthetic scenario"
    );

    let report = estimate_along_route(&route, interval_m, &stations, &options);
    if let (Some(average), Some(category)) = (report.aggregate.average, report.aggregate.category)
    {
        tracing::info!(average, category = category.label(), "Route exposure");
    }

    if args.full {
        print_json(&report, args.options.pretty)
    } else {
        print_json(&report.aggregate, args.options.pretty)
    }
}
