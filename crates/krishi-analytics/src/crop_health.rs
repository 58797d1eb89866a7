// SPDX-License-Identifier: Apache-2.0

use crate::score;
use krishi_model::{SoilReading, WeatherReading};
use krishi_registry::stages;

/// Health reported for a crop when neither source can be reached.
pub const FALLBACK_CROP_HEALTH: u8 = 75;

/// Per-crop health: weighted blend of weather fit, soil status, moisture,
/// and crop age, clamped to `[50, 100]`.
#[must_use]
pub fn compose_crop_health(
    crop: &str,
    days_since_sowing: i64,
    weather: &WeatherReading,
    soil: &SoilReading,
) -> u8 {
    let blend = score::crop_weather_score(weather) * 0.25
        + score::soil_status_score(soil.status) * 0.35
        + (soil.moisture_pct * 1.2).min(100.0) * 0.20
        + stages::age_health_score(crop, days_since_sowing) * 0.20;
    blend.round().clamp(50.0, 100.0) as u8
}
