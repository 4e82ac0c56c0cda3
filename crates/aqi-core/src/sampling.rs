//! Route resampling at a fixed spatial interval.

use crate::models::Coordinate;
use crate::spatial::haversine_distance;

/// Resample `path` into points spaced `interval_meters` apart along its length.
///
/// The first vertex is always emitted, then one interpolated point each time
/// the distance walked since the previous emission reaches the interval, and
/// finally the last vertex (unless the last emitted point is bit-identical to
/// it). Segment lengths are great-circle, but points are interpolated
/// linearly in lat/lon, not along the arc.
///
/// Returns an empty Vec for paths with fewer than 2 vertices or a
/// non-positive interval.
pub fn sample_route_points(path: &[Coordinate], interval_meters: f64) -> Vec<Coordinate> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    if path.len() < 2 || !interval_meters.is_finite() || interval_meters <= 0.0 {
        return Vec::new();
    }

    let mut sampled = vec![first];
    let mut accumulated = 0.0;

    for pair in path.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let segment_m = haversine_distance(start, end);
        // Duplicate vertices add no distance and can't be interpolated along.
        if segment_m <= 0.0 {
            continue;
        }

        accumulated += segment_m;
        while accumulated >= interval_meters {
            let overshoot = accumulated - interval_meters;
            let fraction = ((segment_m - overshoot) / segment_m).clamp(0.0, 1.0);
            sampled.push(interpolate(start, end, fraction));
            accumulated -= interval_meters;
        }
    }

    if sampled.last().is_some_and(|point| !same_bits(*point, last)) {
        sampled.push(last);
    }

    sampled
}

fn interpolate(start: Coordinate, end: Coordinate, fraction: f64) -> Coordinate {
    Coordinate {
        lat: start.lat + (end.lat - start.lat) * fraction,
        lon: start.lon + (end.lon - start.lon) * fraction,
    }
}

fn same_bits(a: Coordinate, b: Coordinate) -> bool {
    a.lat.to_bits() == b.lat.to_bits() && a.lon.to_bits() == b.lon.to_bits()
}
