// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl YieldLevel {
    /// Fixed confidence thresholds: `>=85` Very High, `>=70` High,
    /// `>=55` Moderate, else Low.
    #[must_use]
    pub const fn from_confidence(confidence: u8) -> Self {
        if confidence >= 85 {
            Self::VeryHigh
        } else if confidence >= 70 {
            Self::High
        } else if confidence >= 55 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YieldFactor {
    pub name: String,
    pub impact: Impact,
    pub score: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YieldPrediction {
    pub level: YieldLevel,
    /// Mean of the factor scores, rounded, `[0, 100]`.
    pub confidence: u8,
    pub expected_yield: f64,
    pub unit: String,
    pub factors: Vec<YieldFactor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_thresholds_are_exact_boundaries() {
        assert_eq!(YieldLevel::from_confidence(85), YieldLevel::VeryHigh);
        assert_eq!(YieldLevel::from_confidence(84), YieldLevel::High);
        assert_eq!(YieldLevel::from_confidence(70), YieldLevel::High);
        assert_eq!(YieldLevel::from_confidence(69), YieldLevel::Moderate);
        assert_eq!(YieldLevel::from_confidence(55), YieldLevel::Moderate);
        assert_eq!(YieldLevel::from_confidence(54), YieldLevel::Low);
        assert_eq!(YieldLevel::from_confidence(0), YieldLevel::Low);
    }

    #[test]
    fn very_high_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&YieldLevel::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(serde_json::to_string(&YieldLevel::High).unwrap(), "\"High\"");
    }
}
