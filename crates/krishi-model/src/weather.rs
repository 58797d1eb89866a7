// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the short forecast sequence a weather source may return.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Point-in-time atmospheric snapshot for a location.
///
/// Replaced wholesale on every fetch; the engine keeps no weather history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherReading {
    pub temperature_c: f64,
    /// Relative humidity, percent in `[0, 100]`.
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub pressure_hpa: f64,
    pub feels_like_c: f64,
    pub description: String,
    /// Farming advice derived from the reading by the source.
    pub advice: String,
    pub observed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_c: f64,
    pub description: String,
}

impl ForecastDay {
    /// Rain-rule predicate shared by insight generation and forecast scoring.
    #[must_use]
    pub fn mentions_rain(&self) -> bool {
        self.description.to_lowercase().contains("rain")
    }
}
