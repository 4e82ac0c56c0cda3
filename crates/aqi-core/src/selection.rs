//! Nearest-station selection.

use crate::models::{Coordinate, Station, StationWithDistance};
use crate::spatial::haversine_distance;
use std::cmp::Ordering;

/// Find the stations closest to `target`.
///
/// Stations with non-finite coordinates or a missing/non-finite value are
/// skipped, as are stations farther than `max_distance_meters`. The rest are
/// sorted by distance (stable, so equidistant stations keep their input
/// order) and truncated to `max_stations`.
///
/// Never fails: empty input or no survivors gives an empty Vec.
pub fn find_nearest(
    stations: &[Station],
    target: Coordinate,
    max_stations: usize,
    max_distance_meters: f64,
) -> Vec<StationWithDistance> {
    let mut malformed = 0usize;
    let mut out_of_range = 0usize;

    let mut candidates: Vec<StationWithDistance> = stations
        .iter()
        .filter_map(|station| {
            if !is_usable(station) {
                malformed += 1;
                return None;
            }
            let distance_m = haversine_distance(target, station.coordinates);
            // NaN distances (from a NaN target or radius) must not pass.
            if !(distance_m <= max_distance_meters) {
                out_of_range += 1;
                return None;
            }
            Some(StationWithDistance {
                station: station.clone(),
                distance_m,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.distance_m
            .partial_cmp(&b.distance_m)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(max_stations);

    tracing::debug!(
        total = stations.len(),
        malformed,
        out_of_range,
        selected = candidates.len(),
        "Selected nearest stations"
    );

    candidates
}

fn is_usable(station: &Station) -> bool {
    station.coordinates.is_finite() && station.value.is_some_and(f64::is_finite)
}
