//! Core data models for AQI estimation.

use crate::category::AqiCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Serialized as a `[latitude, longitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lat, coord.lon]
    }
}

/// A fixed sensor station and its latest reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    /// Display label, e.g. the neighbourhood or site name
    pub location: String,
    pub coordinates: Coordinate,
    /// Latest AQI reading; `None` when the station reported no value
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Station {
    /// Create a station with no last-updated timestamp.
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        coordinates: Coordinate,
        value: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            coordinates,
            value: value.into(),
            last_updated: None,
        }
    }

    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = Some(last_updated);
        self
    }
}

/// A station annotated with its distance to a query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationWithDistance {
    #[serde(flatten)]
    pub station: Station,
    /// Distance to the query point in meters
    #[serde(rename = "distance")]
    pub distance_m: f64,
}

/// Outcome of a single-point estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Estimate {
    /// IDW estimate, rounded to one decimal
    Estimated { value: f64 },
    /// Not enough usable stations near the query point
    Unavailable { reason: String },
}

/// Full result of estimating AQI at one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub target: Coordinate,
    pub estimate: Estimate,
    /// Heuristic confidence in [0, 100]
    pub confidence: f64,
    pub stations_used: usize,
    pub stations: Vec<StationWithDistance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AqiCategory>,
}

impl EstimationResult {
    /// The estimated AQI, if one could be produced.
    pub fn value(&self) -> Option<f64> {
        match self.estimate {
            Estimate::Estimated { value } => Some(value),
            Estimate::Unavailable { .. } => None,
        }
    }

    /// Why no estimate was produced.
    pub fn message(&self) -> Option<&str> {
        match &self.estimate {
            Estimate::Estimated { .. } => None,
            Estimate::Unavailable { reason } => Some(reason),
        }
    }
}

/// Estimate for one sampled route point, tagged with its position in the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePointEstimate {
    pub index: usize,
    pub point: Coordinate,
    pub result: EstimationResult,
}

/// Route-level statistics over the per-point estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAggregate {
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub valid_points: usize,
    pub total_points: usize,
    /// Percentage of points with an estimate, rounded to an integer
    pub coverage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AqiCategory>,
}

/// Sampled route with per-point estimates and the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    pub interval_meters: f64,
    pub route_length_m: f64,
    pub points: Vec<RoutePointEstimate>,
    pub aggregate: RouteAggregate,
}
