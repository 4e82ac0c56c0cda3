//! AQI category bands (US EPA scale).

use serde::{Deserialize, Serialize};

/// Health category for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0 - 50
    Good,
    /// 51 - 100
    Moderate,
    /// 101 - 150
    UnhealthyForSensitiveGroups,
    /// 151 - 200
    Unhealthy,
    /// 201 - 300
    VeryUnhealthy,
    /// Above 300
    Hazardous,
}

impl AqiCategory {
    /// Classify an AQI value. Fractional estimates fall into the band whose
    /// upper bound they do not exceed, so 50.4 is `Moderate`.
    pub fn from_aqi(value: f64) -> Self {
        if value <= 50.0 {
            Self::Good
        } else if value <= 100.0 {
            Self::Moderate
        } else if value <= 150.0 {
            Self::UnhealthyForSensitiveGroups
        } else if value <= 200.0 {
            Self::Unhealthy
        } else if value <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}
