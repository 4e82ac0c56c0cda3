//! Estimation options and their defaults.

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};

/// Configuration for IDW estimation.
///
/// Missing fields in a deserialized document fall back to the defaults
/// individually, so `{"power": 3}` keeps the default station limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimationOptions {
    /// IDW exponent
    pub power: f64,
    /// Maximum number of nearest stations to blend
    pub max_stations: usize,
    /// Search radius in meters
    pub max_distance_meters: f64,
    /// Minimum stations required to produce an estimate
    pub min_stations: usize,
}

impl Default for EstimationOptions {
    fn default() -> Self {
        Self {
            power: 2.0,
            max_stations: 3,
            max_distance_meters: 50_000.0,
            min_stations: 1,
        }
    }
}

impl EstimationOptions {
    /// Check the options for values that make the weighting or the
    /// confidence score meaningless.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.power.is_finite() || self.power < 0.0 {
            return Err(OptionsError::InvalidPower(self.power));
        }
        if self.max_stations == 0 {
            return Err(OptionsError::ZeroMaxStations);
        }
        if !self.max_distance_meters.is_finite() || self.max_distance_meters <= 0.0 {
            return Err(OptionsError::InvalidMaxDistance(self.max_distance_meters));
        }
        if self.min_stations > self.max_stations {
            return Err(OptionsError::MinExceedsMax {
                min: self.min_stations,
                max: self.max_stations,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = EstimationOptions::default();
        assert_eq!(opts.power, 2.0);
        assert_eq!(opts.max_stations, 3);
        assert_eq!(opts.max_distance_meters, 50_000.0);
        assert_eq!(opts.min_stations, 1);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let opts: EstimationOptions =
            serde_json::from_str(r#"{"power": 3, "maxDistanceMeters": 10000}"#).unwrap();
        assert_eq!(opts.power, 3.0);
        assert_eq!(opts.max_distance_meters, 10_000.0);
        assert_eq!(opts.max_stations, 3);
        assert_eq!(opts.min_stations, 1);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut opts = EstimationOptions {
            power: -1.0,
            ..Default::default()
        };
        assert_eq!(opts.validate(), Err(OptionsError::InvalidPower(-1.0)));

        opts.power = 2.0;
        opts.max_stations = 0;
        assert_eq!(opts.validate(), Err(OptionsError::ZeroMaxStations));

        opts.max_stations = 2;
        opts.min_stations = 3;
        assert_eq!(
            opts.validate(),
            Err(OptionsError::MinExceedsMax { min: 3, max: 2 })
        );

        opts.min_stations = 1;
        opts.max_distance_meters = 0.0;
        assert_eq!(opts.validate(), Err(OptionsError::InvalidMaxDistance(0.0)));
    }
}
