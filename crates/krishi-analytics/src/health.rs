// SPDX-License-Identifier: Apache-2.0

use crate::score;
use chrono::{DateTime, Utc};
use krishi_model::{FarmHealthScore, SoilAnalysis, SoilReading, Trend, WeatherReading};

/// Compose the four-factor farm health artifact from already-fetched data.
#[must_use]
pub fn compose_farm_health(
    weather: &WeatherReading,
    soil: &SoilReading,
    analysis: &SoilAnalysis,
    now: DateTime<Utc>,
) -> FarmHealthScore {
    let water_score = score::water_availability_score(soil.moisture_pct);
    let water_trend = if soil.moisture_pct > 60.0 {
        Trend::Improving
    } else {
        Trend::Declining
    };
    let water_recommendation = if soil.moisture_pct < 50.0 {
        "Increase irrigation frequency"
    } else {
        "Water availability is good"
    };

    let factors = vec![
        score::factor(
            "Soil Quality",
            f64::from(analysis.health_score),
            Trend::Stable,
            soil.recommendation.clone(),
        ),
        score::factor(
            "Water Availability",
            water_score,
            water_trend,
            water_recommendation,
        ),
        score::factor(
            "Weather Conditions",
            score::weather_score(weather),
            Trend::Stable,
            weather.advice.clone(),
        ),
        score::factor(
            "Nutrient Balance",
            score::nutrient_score(soil),
            Trend::Stable,
            "Follow fertilizer recommendations for optimal growth",
        ),
    ];

    FarmHealthScore {
        overall_score: score::overall_score(&factors),
        trend: score::majority_trend(&factors),
        factors,
        last_updated: now,
    }
}
