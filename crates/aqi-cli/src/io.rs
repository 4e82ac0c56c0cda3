//! File loading and JSON output for the binaries.

use anyhow::{Context, Result};
use aqi_core::{parse_route, parse_stations, Coordinate, Station};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a station feed, skipping malformed records.
pub fn load_stations(path: &Path) -> Result<Vec<Station>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stations file {}", path.display()))?;
    let stations = parse_stations(&raw)
        .with_context(|| format!("Invalid stations file {}", path.display()))?;
    tracing::info!(count = stations.len(), file = %path.display(), "Loaded stations");
    Ok(stations)
}

/// Load a route as `[lat, lon]` vertices.
pub fn load_route(path: &Path) -> Result<Vec<Coordinate>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file {}", path.display()))?;
    let route =
        parse_route(&raw).with_context(|| format!("Invalid route file {}", path.display()))?;
    tracing::info!(vertices = route.len(), file = %path.display(), "Loaded route");
    Ok(route)
}

/// Print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
