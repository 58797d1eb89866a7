// SPDX-License-Identifier: Apache-2.0

use crate::score;
use krishi_model::{
    ForecastDay, SoilReading, WeatherReading, YieldFactor, YieldLevel, YieldPrediction,
};

/// Compose a yield prediction from already-fetched data.
#[must_use]
pub fn compose_yield_prediction(
    crop: &str,
    area_acres: f64,
    weather: &WeatherReading,
    soil: &SoilReading,
    forecast: &[ForecastDay],
) -> YieldPrediction {
    let factors = yield_factors(weather, soil, forecast);
    let confidence = confidence_from(&factors);
    let expected_yield = expected_yield(crop, area_acres, confidence, soil);

    YieldPrediction {
        level: YieldLevel::from_confidence(confidence),
        confidence,
        expected_yield,
        unit: score::yield_unit(crop).to_string(),
        factors,
    }
}

fn yield_factors(
    weather: &WeatherReading,
    soil: &SoilReading,
    forecast: &[ForecastDay],
) -> Vec<YieldFactor> {
    let weather_score = score::weather_score(weather);
    let nutrient_score = score::nutrient_score(soil);
    let forecast_score = score::forecast_score(forecast);

    vec![
        YieldFactor {
            name: "Weather Pattern".to_string(),
            impact: score::weather_impact(weather_score),
            score: weather_score,
            description: format!(
                "Temperature: {:.0}°C, Humidity: {:.0}%",
                weather.temperature_c, weather.humidity_pct
            ),
        },
        YieldFactor {
            name: "Soil Condition".to_string(),
            impact: score::soil_impact(soil.status),
            score: score::soil_status_score(soil.status),
            description: format!("pH: {}, Moisture: {:.0}%", soil.ph, soil.moisture_pct),
        },
        YieldFactor {
            name: "Nutrient Availability".to_string(),
            impact: score::nutrient_impact(nutrient_score),
            score: nutrient_score,
            description: format!(
                "N: {}, P: {}, K: {}",
                soil.nitrogen, soil.phosphorus, soil.potassium
            ),
        },
        YieldFactor {
            name: "Forecast Outlook".to_string(),
            impact: score::forecast_impact(forecast_score),
            score: forecast_score,
            description: forecast.first().map_or_else(
                || "Stable conditions expected".to_string(),
                |day| format!("Next few days: {}", day.description),
            ),
        },
    ]
}

/// Mean of the factor scores, rounded.
#[must_use]
pub fn confidence_from(factors: &[YieldFactor]) -> u8 {
    if factors.is_empty() {
        return 0;
    }
    let mean = factors.iter().map(|f| f.score).sum::<f64>() / factors.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

/// `base_yield(crop) * area * (confidence / 100) * soil_multiplier`, rounded.
#[must_use]
pub fn expected_yield(crop: &str, area_acres: f64, confidence: u8, soil: &SoilReading) -> f64 {
    let base = score::base_yield(crop);
    let confidence_factor = f64::from(confidence) / 100.0;
    let soil_factor = score::soil_multiplier(soil.status);
    (base * area_acres * confidence_factor * soil_factor).round()
}
