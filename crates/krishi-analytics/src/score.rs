// SPDX-License-Identifier: Apache-2.0

//! Pure scoring primitives shared by the engine's computations.
//!
//! All functions here are deterministic in their inputs; nothing reads the
//! clock or fetches data.

use krishi_model::{
    FactorStatus, ForecastDay, HealthFactor, Impact, NutrientLevel, SoilReading, SoilStatus,
    Trend, WeatherReading,
};
use tracing::warn;

/// Ideal band: 25 degC and 60% humidity; each deviation is penalized
/// linearly and floored at zero before averaging.
#[must_use]
pub fn weather_score(weather: &WeatherReading) -> f64 {
    let temp_score = (100.0 - (weather.temperature_c - 25.0).abs() * 3.0).max(0.0);
    let humidity_score = (100.0 - (weather.humidity_pct - 60.0).abs() * 2.0).max(0.0);
    ((temp_score + humidity_score) / 2.0).round()
}

/// Gentler temperature penalty used by the per-crop health blend.
#[must_use]
pub fn crop_weather_score(weather: &WeatherReading) -> f64 {
    (100.0 - (weather.temperature_c - 25.0).abs() * 2.0).max(0.0)
}

#[must_use]
pub fn nutrient_points(level: NutrientLevel) -> f64 {
    match level {
        NutrientLevel::High => 95.0,
        NutrientLevel::Adequate => 75.0,
        NutrientLevel::Low => 50.0,
    }
}

/// Mean of the three N/P/K point scores.
#[must_use]
pub fn nutrient_score(soil: &SoilReading) -> f64 {
    ((nutrient_points(soil.nitrogen)
        + nutrient_points(soil.phosphorus)
        + nutrient_points(soil.potassium))
        / 3.0)
        .round()
}

/// Moisture-driven water availability, capped at 100.
#[must_use]
pub fn water_availability_score(moisture_pct: f64) -> f64 {
    (moisture_pct * 1.3).min(100.0)
}

#[must_use]
pub fn soil_status_score(status: SoilStatus) -> f64 {
    match status {
        SoilStatus::Excellent => 95.0,
        SoilStatus::Good => 80.0,
        SoilStatus::Fair => 65.0,
        SoilStatus::Poor => 50.0,
    }
}

/// Yield multiplier applied on top of confidence.
#[must_use]
pub fn soil_multiplier(status: SoilStatus) -> f64 {
    match status {
        SoilStatus::Excellent => 1.2,
        SoilStatus::Good => 1.0,
        SoilStatus::Fair => 0.85,
        SoilStatus::Poor => 0.7,
    }
}

/// Outlook score over the short forecast: 60 when no forecast is available,
/// otherwise 70 minus 10 per extreme-temperature day, +10 for one or two
/// rainy days, -15 for more than three, clamped to `[40, 95]`.
#[must_use]
pub fn forecast_score(forecast: &[ForecastDay]) -> f64 {
    if forecast.is_empty() {
        return 60.0;
    }
    let extreme_days = forecast
        .iter()
        .filter(|day| day.temp_c > 38.0 || day.temp_c < 10.0)
        .count() as f64;
    let rainy_days = forecast.iter().filter(|day| day.mentions_rain()).count();

    let mut score = 70.0 - extreme_days * 10.0;
    if rainy_days == 1 || rainy_days == 2 {
        score += 10.0;
    } else if rainy_days > 3 {
        score -= 15.0;
    }
    score.clamp(40.0, 95.0)
}

#[must_use]
pub fn weather_impact(score: f64) -> Impact {
    if score >= 75.0 {
        Impact::Positive
    } else if score >= 55.0 {
        Impact::Neutral
    } else {
        Impact::Negative
    }
}

#[must_use]
pub fn nutrient_impact(score: f64) -> Impact {
    if score >= 75.0 {
        Impact::Positive
    } else if score >= 60.0 {
        Impact::Neutral
    } else {
        Impact::Negative
    }
}

#[must_use]
pub fn soil_impact(status: SoilStatus) -> Impact {
    match status {
        SoilStatus::Excellent | SoilStatus::Good => Impact::Positive,
        SoilStatus::Fair => Impact::Neutral,
        SoilStatus::Poor => Impact::Negative,
    }
}

#[must_use]
pub fn forecast_impact(score: f64) -> Impact {
    if score >= 70.0 {
        Impact::Positive
    } else if score >= 50.0 {
        Impact::Neutral
    } else {
        Impact::Negative
    }
}

/// Base yield per acre. Unmodeled crops fall back to the Wheat base; the
/// fallback is logged so it is visible in operation.
#[must_use]
pub fn base_yield(crop: &str) -> f64 {
    match crop.to_lowercase().as_str() {
        "wheat" => 20.0,
        "rice" => 25.0,
        "cotton" => 15.0,
        "maize" => 22.0,
        "sugarcane" => 350.0,
        _ => {
            warn!(crop = %crop, "no base yield for crop; using wheat default");
            20.0
        }
    }
}

#[must_use]
pub fn yield_unit(crop: &str) -> &'static str {
    if crop.eq_ignore_ascii_case("sugarcane") {
        "tons"
    } else {
        "quintals"
    }
}

/// Unweighted arithmetic mean of the factor scores, rounded to nearest.
#[must_use]
pub fn overall_score(factors: &[HealthFactor]) -> u8 {
    if factors.is_empty() {
        return 0;
    }
    let mean = factors.iter().map(|f| f.score).sum::<f64>() / factors.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

/// Majority vote over per-factor trends; ties resolve to stable.
#[must_use]
pub fn majority_trend(factors: &[HealthFactor]) -> Trend {
    let improving = factors.iter().filter(|f| f.trend == Trend::Improving).count();
    let declining = factors.iter().filter(|f| f.trend == Trend::Declining).count();
    if improving > declining {
        Trend::Improving
    } else if declining > improving {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Helper for building a factor whose status follows the shared thresholds.
#[must_use]
pub fn factor(name: &str, score: f64, trend: Trend, recommendation: impl Into<String>) -> HealthFactor {
    HealthFactor {
        name: name.to_string(),
        score,
        status: FactorStatus::from_score(score),
        trend,
        recommendation: recommendation.into(),
    }
}
