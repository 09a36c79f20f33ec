use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One date's worth of measurements, keyed by canonical parameter name.
///
/// Parameters without an observation on this date are missing keys, never
/// zero or null placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub values: BTreeMap<String, f64>,
}

/// Per-parameter summary derived from a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Canonical parameter name, or the original label for unknown parameters.
    pub name: String,
    /// Value at the chronologically last date with data.
    pub latest_value: Option<f64>,
    /// Value at the second-to-last date with data.
    pub previous_value: Option<f64>,
    /// `latest - previous`, or 0.0 when either is missing.
    pub trend: f64,
    pub unit: String,
    pub category: String,
}

impl Metric {
    /// Computes the trend from the latest and previous observations.
    pub fn trend_between(latest: Option<f64>, previous: Option<f64>) -> f64 {
        match (latest, previous) {
            (Some(latest), Some(previous)) => latest - previous,
            _ => 0.0,
        }
    }
}
