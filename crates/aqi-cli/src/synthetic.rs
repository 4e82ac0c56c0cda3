//! Synthetic station feeds and routes for demos.

use aqi_core::{Coordinate, Station};
use chrono::Utc;
use rand::Rng;

/// Rough meters per degree of latitude.
const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Kuala Lumpur city centre.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(3.1390, 101.6869);

/// Scatter `count` stations uniformly within `radius_m` of `center`.
///
/// Readings are drawn from the Good..Unhealthy range. Every fifth station is
/// offline (no value), like a real feed with stale sensors.
pub fn random_stations<R: Rng>(
    rng: &mut R,
    center: Coordinate,
    radius_m: f64,
    count: usize,
) -> Vec<Station> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let north_m = rng.random_range(-radius_m..=radius_m);
            let east_m = rng.random_range(-radius_m..=radius_m);
            let value = (i % 5 != 4)
                .then(|| (rng.random_range(15.0..180.0_f64) * 10.0).round() / 10.0);
            Station::new(
                format!("SYN{:03}", i + 1),
                format!("Synthetic station {}", i + 1),
                offset(center, north_m, east_m),
                value,
            )
            .with_last_updated(now)
        })
        .collect()
}

/// Straight west-to-east route through `center`, `half_length_m` each side,
/// with a dogleg vertex north of the centre.
pub fn crossing_route(center: Coordinate, half_length_m: f64) -> Vec<Coordinate> {
    vec![
        offset(center, 0.0, -half_length_m),
        offset(center, half_length_m * 0.1, 0.0),
        offset(center, 0.0, half_length_m),
    ]
}

/// Offset a position by meters north and east (flat-earth approximation).
fn offset(origin: Coordinate, north_m: f64, east_m: f64) -> Coordinate {
    let meters_per_deg_lon = METERS_PER_DEG_LAT * origin.lat.to_radians().cos().abs().max(0.01);
    Coordinate::new(
        origin.lat + north_m / METERS_PER_DEG_LAT,
        origin.lon + east_m / meters_per_deg_lon,
    )
}
