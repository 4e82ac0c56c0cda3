//! AQI Core - Air quality interpolation between fixed sensor stations.
//!
//! Estimates AQI at arbitrary points using inverse distance weighting over
//! the nearest stations, and along routes by resampling the path at a fixed
//! spacing and summarizing the per-point estimates.

pub mod aggregate;
pub mod category;
pub mod error;
pub mod estimator;
pub mod input;
pub mod models;
pub mod options;
pub mod sampling;
pub mod selection;
pub mod spatial;

pub use aggregate::{aggregate, estimate_along_route, estimate_route, summarize};
pub use category::AqiCategory;
pub use error::{InputError, OptionsError};
pub use estimator::estimate;
pub use input::{parse_route, parse_stations, stations_from_value};
pub use models::{
    Coordinate, Estimate, EstimationResult, RouteAggregate, RoutePointEstimate, RouteReport,
    Station, StationWithDistance,
};
pub use options::EstimationOptions;
pub use sampling::sample_route_points;
pub use selection::find_nearest;
pub use spatial::{haversine_distance, path_length, EARTH_RADIUS_M};
