use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitPotential {
    High,
    Medium,
    Low,
}

impl ProfitPotential {
    /// Suitability thresholds: `>=80` high, `>=60` medium, else low.
    #[must_use]
    pub const fn from_suitability(suitability: u8) -> Self {
        if suitability >= 80 {
            Self::High
        } else if suitability >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Seasonal crop recommendation for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropRecommendation {
    pub crop: String,
    /// Clamped to `[40, 100]`.
    pub suitability: u8,
    pub reason: String,
    pub expected_yield: f64,
    pub yield_unit: String,
    /// Indicative market price per quintal (INR), from the MSP table.
    pub market_price: f64,
    pub profit_potential: ProfitPotential,
}
