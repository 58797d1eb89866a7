// SPDX-License-Identifier: Apache-2.0

//! Seasonal crop recommendations.
//!
//! Suitability starts from a per-season base score, gets adjusted for the
//! observed soil and weather, and is clamped to `[40, 100]`. Yield numbers
//! are per-acre estimates from the same model the yield prediction uses.

use crate::{prediction, score};
use krishi_model::{
    CropRecommendation, ProfitPotential, Season, SoilReading, SoilStatus, WeatherReading,
};

/// Base suitability of a crop within a season. Crops outside the season's
/// recommended set score a flat 50.
#[must_use]
pub fn base_suitability(season: Season, crop: &str) -> u8 {
    match (season, crop) {
        (Season::Kharif, "Rice") => 90,
        (Season::Kharif, "Cotton") => 85,
        (Season::Kharif, "Maize") => 80,
        (Season::Kharif, "Sorghum") => 75,
        (Season::Kharif, "Bajra") => 80,
        (Season::Rabi, "Wheat") => 90,
        (Season::Rabi, "Barley") => 85,
        (Season::Rabi, "Mustard") => 80,
        (Season::Rabi, "Chickpea") => 85,
        (Season::Rabi, "Lentil") => 80,
        (Season::Zaid, "Watermelon") => 90,
        (Season::Zaid, "Cucumber") => 85,
        (Season::Zaid, "Muskmelon") => 80,
        (Season::Zaid, "Vegetables") => 75,
        _ => 50,
    }
}

/// Minimum support price per quintal (INR). Sugarcane is per ton.
#[must_use]
pub fn market_price(crop: &str) -> f64 {
    match crop {
        "Wheat" => 2125.0,
        "Rice" => 2183.0,
        "Cotton" => 6620.0,
        "Maize" => 2090.0,
        "Sugarcane" => 340.0,
        "Barley" => 1850.0,
        "Mustard" => 5650.0,
        "Chickpea" => 5440.0,
        _ => 2000.0,
    }
}

fn suitability_for(
    season: Season,
    crop: &str,
    weather: &WeatherReading,
    soil: &SoilReading,
) -> u8 {
    let mut suitability = i16::from(base_suitability(season, crop));
    match soil.status {
        SoilStatus::Excellent => suitability += 5,
        SoilStatus::Poor => suitability -= 15,
        SoilStatus::Good | SoilStatus::Fair => {}
    }
    if (20.0..=30.0).contains(&weather.temperature_c) {
        suitability += 5;
    }
    if (50.0..=70.0).contains(&weather.humidity_pct) {
        suitability += 5;
    }
    suitability.clamp(40, 100) as u8
}

fn reason_for(season: Season, crop: &str, suitability: u8) -> String {
    if suitability >= 85 {
        format!("Excellent choice for {season} season. All conditions favor {crop} cultivation.")
    } else if suitability >= 70 {
        format!("Good option for {season}. {crop} should perform well.")
    } else if suitability >= 55 {
        format!("Moderate suitability. {crop} can be grown with proper care.")
    } else {
        "Low suitability for current conditions. Consider alternatives.".to_string()
    }
}

/// Rank the season's recommended crops against observed conditions,
/// best first.
#[must_use]
pub fn compose_recommendations(
    season: Season,
    weather: &WeatherReading,
    soil: &SoilReading,
) -> Vec<CropRecommendation> {
    let mut recommendations: Vec<CropRecommendation> = season
        .recommended_crops()
        .iter()
        .map(|crop| {
            let suitability = suitability_for(season, crop, weather, soil);
            CropRecommendation {
                crop: (*crop).to_string(),
                suitability,
                reason: reason_for(season, crop, suitability),
                expected_yield: prediction::expected_yield(crop, 1.0, suitability, soil),
                yield_unit: score::yield_unit(crop).to_string(),
                market_price: market_price(crop),
                profit_potential: ProfitPotential::from_suitability(suitability),
            }
        })
        .collect();
    recommendations.sort_by(|a, b| b.suitability.cmp(&a.suitability));
    recommendations
}
