//! Route-level estimation: per-point AQI and summary statistics.

use crate::category::AqiCategory;
use crate::estimator::{estimate, round_to_tenth};
use crate::models::{Coordinate, RouteAggregate, RoutePointEstimate, RouteReport, Station};
use crate::options::EstimationOptions;
use crate::sampling::sample_route_points;
use crate::spatial::path_length;
use rayon::prelude::*;

const NO_VALID_POINTS_MESSAGE: &str = "No valid AQI estimates along route";

/// Estimate AQI at every point, preserving input order.
///
/// Points are independent, so they are estimated in parallel; the indexed
/// collect keeps results in input order.
pub fn estimate_route(
    points: &[Coordinate],
    stations: &[Station],
    options: &EstimationOptions,
) -> Vec<RoutePointEstimate> {
    points
        .par_iter()
        .enumerate()
        .map(|(index, &point)| RoutePointEstimate {
            index,
            point,
            result: estimate(point, stations, options),
        })
        .collect()
}

/// Estimate every point and summarize the route.
pub fn aggregate(
    points: &[Coordinate],
    stations: &[Station],
    options: &EstimationOptions,
) -> RouteAggregate {
    summarize(&estimate_route(points, stations, options))
}

/// Summarize already-computed per-point estimates.
///
/// Points without an estimate are left out of the statistics but still count
/// toward the coverage denominator.
pub fn summarize(estimates: &[RoutePointEstimate]) -> RouteAggregate {
    let total_points = estimates.len();
    let values: Vec<f64> = estimates
        .iter()
        .filter_map(|entry| entry.result.value())
        .collect();

    if values.is_empty() {
        return RouteAggregate {
            average: None,
            min: None,
            max: None,
            valid_points: 0,
            total_points,
            coverage: 0,
            message: Some(NO_VALID_POINTS_MESSAGE.to_string()),
            category: None,
        };
    }

    let valid_points = values.len();
    let average = round_to_tenth(values.iter().sum::<f64>() / valid_points as f64);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let coverage = (valid_points as f64 / total_points as f64 * 100.0).round() as u32;

    RouteAggregate {
        average: Some(average),
        min: Some(min),
        max: Some(max),
        valid_points,
        total_points,
        coverage,
        message: None,
        category: Some(AqiCategory::from_aqi(average)),
    }
}

/// Sample `path` every `interval_meters`, estimate each sample and summarize.
pub fn estimate_along_route(
    path: &[Coordinate],
    interval_meters: f64,
    stations: &[Station],
    options: &EstimationOptions,
) -> RouteReport {
    let samples = sample_route_points(path, interval_meters);
    let points = estimate_route(&samples, stations, options);
    let aggregate = summarize(&points);
    let route_length_m = path_length(path);

    tracing::info!(
        vertices = path.len(),
        samples = samples.len(),
        route_length_m = route_length_m.round(),
        valid = aggregate.valid_points,
        coverage = aggregate.coverage,
        average = ?aggregate.average,
        "Estimated AQI along route"
    );

    RouteReport {
        interval_meters,
        route_length_m,
        points,
        aggregate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new("west", "West", Coordinate::new(0.0, 0.0), 40.0),
            Station::new("east", "East", Coordinate::new(0.0, 0.05), 120.0),
        ]
    }

    #[test]
    fn estimate_route_preserves_order_and_indices() {
        let points: Vec<Coordinate> = (0..50)
            .map(|i| Coordinate::new(0.0, i as f64 * 0.001))
            .collect();
        let estimates = estimate_route(&points, &stations(), &EstimationOptions::default());
        assert_eq!(estimates.len(), points.len());
        for (i, entry) in estimates.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(entry.point, points[i]);
            assert_eq!(entry.result.target, points[i]);
        }
    }

    #[test]
    fn aggregate_computes_stats_and_coverage() {
        let options = EstimationOptions {
            max_distance_meters: 1_000.0,
            ..Default::default()
        };
        let points = [
            Coordinate::new(0.0, 0.0),  // on "west"
            Coordinate::new(0.0, 0.05), // on "east"
            Coordinate::new(0.0, 0.025), // ~2.8 km from both
        ];
        let summary = aggregate(&points, &stations(), &options);
        assert_eq!(summary.total_points, 3);
        assert_eq!(summary.valid_points, 2);
        assert_eq!(summary.average, Some(80.0));
        assert_eq!(summary.min, Some(40.0));
        assert_eq!(summary.max, Some(120.0));
        assert_eq!(summary.coverage, 67);
        assert_eq!(summary.category, Some(AqiCategory::Moderate));
        assert!(summary.message.is_none());
    }

    #[test]
    fn aggregate_without_valid_points() {
        let points = [Coordinate::new(45.0, 45.0), Coordinate::new(46.0, 46.0)];
        let summary = aggregate(&points, &stations(), &EstimationOptions::default());
        assert_eq!(summary.average, None);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.valid_points, 0);
        assert_eq!(summary.total_points, 2);
        assert_eq!(summary.coverage, 0);
        assert_eq!(summary.message.as_deref(), Some(NO_VALID_POINTS_MESSAGE));
    }

    #[test]
    fn aggregate_of_empty_route() {
        let summary = aggregate(&[], &stations(), &EstimationOptions::default());
        assert_eq!(summary.total_points, 0);
        assert_eq!(summary.coverage, 0);
        assert!(summary.average.is_none());
    }

    #[test]
    fn report_covers_sampled_route() {
        let path = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.05)];
        let report = estimate_along_route(&path, 500.0, &stations(), &EstimationOptions::default());
        assert_eq!(report.points.first().map(|p| p.point), Some(path[0]));
        assert_eq!(report.points.last().map(|p| p.point), Some(path[1]));
        assert_eq!(report.aggregate.total_points, report.points.len());
        assert_eq!(report.aggregate.coverage, 100);
        assert!((report.route_length_m - 5_559.7).abs() < 1.0);
    }
}
