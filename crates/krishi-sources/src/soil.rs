// SPDX-License-Identifier: Apache-2.0

use crate::ports::SoilSource;
use async_trait::async_trait;
use krishi_core::{stable_hash_bytes, EngineError};
use krishi_model::{NutrientLevel, SoilAnalysis, SoilReading, SoilStatus};

/// Deterministic synthetic soil provider.
///
/// There is no public soil-sensor API to call, so readings are derived from a
/// stable hash of `(location, crop)`: the same field always reports the same
/// chemistry, and different fields differ. Values stay inside agronomically
/// plausible ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticSoil;

impl SyntheticSoil {
    #[must_use]
    pub fn reading_for(location: &str, crop: Option<&str>) -> SoilReading {
        let seed = format!("{}|{}", location.to_lowercase(), crop.unwrap_or("").to_lowercase());
        let digest = stable_hash_bytes(seed.as_bytes());

        let ph = 5.5 + f64::from(digest[0]) / 255.0 * 2.5;
        let moisture_pct = (25.0 + f64::from(digest[1]) / 255.0 * 60.0).round();
        let nitrogen = nutrient_from_byte(digest[2]);
        let phosphorus = nutrient_from_byte(digest[3]);
        let potassium = nutrient_from_byte(digest[4]);

        let score = health_score(ph, moisture_pct, nitrogen, phosphorus, potassium);
        let status = status_from_score(score);
        SoilReading {
            ph: (ph * 10.0).round() / 10.0,
            nitrogen,
            phosphorus,
            potassium,
            moisture_pct,
            status,
            recommendation: recommendation_for(status, nitrogen).to_string(),
        }
    }

    #[must_use]
    pub fn score_for(location: &str, crop: Option<&str>) -> u8 {
        let reading = Self::reading_for(location, crop);
        health_score(
            reading.ph,
            reading.moisture_pct,
            reading.nitrogen,
            reading.phosphorus,
            reading.potassium,
        )
    }
}

#[async_trait]
impl SoilSource for SyntheticSoil {
    async fn health(
        &self,
        location: &str,
        crop: Option<&str>,
    ) -> Result<SoilReading, EngineError> {
        Ok(Self::reading_for(location, crop))
    }

    async fn analysis(
        &self,
        location: &str,
        crop: Option<&str>,
    ) -> Result<SoilAnalysis, EngineError> {
        Ok(SoilAnalysis {
            health_score: Self::score_for(location, crop),
        })
    }
}

fn nutrient_from_byte(byte: u8) -> NutrientLevel {
    match byte % 3 {
        0 => NutrientLevel::Low,
        1 => NutrientLevel::Adequate,
        _ => NutrientLevel::High,
    }
}

fn nutrient_points(level: NutrientLevel) -> f64 {
    match level {
        NutrientLevel::High => 95.0,
        NutrientLevel::Adequate => 75.0,
        NutrientLevel::Low => 50.0,
    }
}

/// 0-100 composite: pH proximity to the 6.5-7.0 band, moisture, and N/P/K.
fn health_score(
    ph: f64,
    moisture_pct: f64,
    nitrogen: NutrientLevel,
    phosphorus: NutrientLevel,
    potassium: NutrientLevel,
) -> u8 {
    let ph_score = (100.0 - (ph - 6.75).abs() * 24.0).clamp(0.0, 100.0);
    let moisture_score = (moisture_pct * 1.2).min(100.0);
    let nutrient_score = (nutrient_points(nitrogen)
        + nutrient_points(phosphorus)
        + nutrient_points(potassium))
        / 3.0;
    let blended = ph_score * 0.3 + moisture_score * 0.3 + nutrient_score * 0.4;
    blended.round().clamp(0.0, 100.0) as u8
}

fn status_from_score(score: u8) -> SoilStatus {
    if score >= 85 {
        SoilStatus::Excellent
    } else if score >= 70 {
        SoilStatus::Good
    } else if score >= 55 {
        SoilStatus::Fair
    } else {
        SoilStatus::Poor
    }
}

fn recommendation_for(status: SoilStatus, nitrogen: NutrientLevel) -> &'static str {
    if nitrogen == NutrientLevel::Low {
        return "Apply nitrogen-rich fertilizer (urea) in split doses.";
    }
    match status {
        SoilStatus::Excellent => "Soil is in excellent condition. Maintain current practices.",
        SoilStatus::Good => "Soil is healthy. Continue balanced fertilization.",
        SoilStatus::Fair => "Add organic matter and review fertilization schedule.",
        SoilStatus::Poor => "Soil needs attention: test in a lab and amend before sowing.",
    }
}
