//! Inverse-distance-weighted AQI estimation at a single point.
//!
//! ```text
//! aqi(p) = Σ(wi * vi) / Σ(wi)
//! where wi = 1 / max(d(p, si), 1 m)^power
//! ```

use crate::category::AqiCategory;
use crate::models::{Coordinate, Estimate, EstimationResult, Station, StationWithDistance};
use crate::options::EstimationOptions;
use crate::selection::find_nearest;

/// Distances below this are clamped so co-located stations don't blow up the weight.
const MIN_WEIGHT_DISTANCE_M: f64 = 1.0;

const DISTANCE_SCORE_WEIGHT: f64 = 0.6;
const STATION_COUNT_SCORE_WEIGHT: f64 = 0.4;

/// Estimate AQI at `target` from the nearest stations.
///
/// Too few usable stations in range is not an error: the result carries
/// [`Estimate::Unavailable`] with a reason and zero confidence.
pub fn estimate(
    target: Coordinate,
    stations: &[Station],
    options: &EstimationOptions,
) -> EstimationResult {
    let nearest = find_nearest(
        stations,
        target,
        options.max_stations,
        options.max_distance_meters,
    );
    let found = nearest.len();

    if found == 0 || found < options.min_stations {
        return EstimationResult {
            target,
            estimate: Estimate::Unavailable {
                reason: format!(
                    "Insufficient stations found. Required: {}, Found: {}",
                    options.min_stations, found
                ),
            },
            confidence: 0.0,
            stations_used: found,
            stations: round_distances(nearest),
            category: None,
        };
    }

    let (weighted_sum, weight_sum) = nearest
        .iter()
        .filter_map(|entry| entry.station.value.map(|value| (value, entry.distance_m)))
        .fold((0.0, 0.0), |(acc_vw, acc_w), (value, distance_m)| {
            let weight = 1.0 / distance_m.max(MIN_WEIGHT_DISTANCE_M).powf(options.power);
            (acc_vw + value * weight, acc_w + weight)
        });
    let value = round_to_tenth(weighted_sum / weight_sum);

    let confidence = confidence_score(&nearest, options);

    EstimationResult {
        target,
        estimate: Estimate::Estimated { value },
        confidence,
        stations_used: found,
        stations: round_distances(nearest),
        category: Some(AqiCategory::from_aqi(value)),
    }
}

/// Heuristic 0-100 score rewarding close stations and a full station count.
fn confidence_score(nearest: &[StationWithDistance], options: &EstimationOptions) -> f64 {
    let used = nearest.len() as f64;
    let avg_distance = nearest.iter().map(|entry| entry.distance_m).sum::<f64>() / used;

    let distance_score = (1.0 - avg_distance / options.max_distance_meters).max(0.0);
    let station_count_score = if options.max_stations == 0 {
        0.0
    } else {
        (used / options.max_stations as f64).min(1.0)
    };

    let raw = (DISTANCE_SCORE_WEIGHT * distance_score
        + STATION_COUNT_SCORE_WEIGHT * station_count_score)
        * 100.0;
    round_to_tenth(raw).clamp(0.0, 100.0)
}

fn round_distances(nearest: Vec<StationWithDistance>) -> Vec<StationWithDistance> {
    nearest
        .into_iter()
        .map(|entry| StationWithDistance {
            distance_m: entry.distance_m.round(),
            ..entry
        })
        .collect()
}

/// Halves round away from zero, so -2.25 becomes -2.3.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
