//! CLI configuration from environment, overridable by flags.

use aqi_core::EstimationOptions;
use clap::Args;
use std::env;
use std::str::FromStr;

const DEFAULT_SAMPLE_INTERVAL_M: f64 = 500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub options: EstimationOptions,
    pub sample_interval_m: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: EstimationOptions::default(),
            sample_interval_m: DEFAULT_SAMPLE_INTERVAL_M,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            options: EstimationOptions {
                power: parse_var(&lookup, "AQI_POWER").unwrap_or(defaults.options.power),
                max_stations: parse_var(&lookup, "AQI_MAX_STATIONS")
                    .unwrap_or(defaults.options.max_stations),
                max_distance_meters: parse_var(&lookup, "AQI_MAX_DISTANCE_M")
                    .unwrap_or(defaults.options.max_distance_meters),
                min_stations: parse_var(&lookup, "AQI_MIN_STATIONS")
                    .unwrap_or(defaults.options.min_stations),
            },
            sample_interval_m: parse_var(&lookup, "AQI_SAMPLE_INTERVAL_M")
                .unwrap_or(defaults.sample_interval_m),
        }
    }

    /// Sampling interval in meters: `flag` if given, else the configured one.
    pub fn sample_interval(&self, flag: Option<f64>) -> anyhow::Result<f64> {
        let interval_m = flag.unwrap_or(self.sample_interval_m);
        anyhow::ensure!(
            interval_m.is_finite() && interval_m > 0.0,
            "interval must be a positive number of meters (got {interval_m})"
        );
        Ok(interval_m)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}

/// Estimation flags shared by every binary. Unset flags fall back to the
/// environment configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// IDW power (env: AQI_POWER)
    #[arg(long)]
    pub power: Option<f64>,

    /// Maximum stations blended per point (env: AQI_MAX_STATIONS)
    #[arg(long)]
    pub max_stations: Option<usize>,

    /// Station search radius in meters (env: AQI_MAX_DISTANCE_M)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum stations required for an estimate (env: AQI_MIN_STATIONS)
    #[arg(long)]
    pub min_stations: Option<usize>,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl OptionArgs {
    /// Overlay the flags on `base` and validate the result.
    pub fn resolve(&self, base: &EstimationOptions) -> anyhow::Result<EstimationOptions> {
        let options = EstimationOptions {
            power: self.power.unwrap_or(base.power),
            max_stations: self.max_stations.unwrap_or(base.max_stations),
            max_distance_meters: self.max_distance.unwrap_or(base.max_distance_meters),
            min_stations: self.min_stations.unwrap_or(base.min_stations),
        };
        options.validate()?;
        Ok(options)
    }
}
