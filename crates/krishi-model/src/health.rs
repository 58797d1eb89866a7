// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed score-to-status thresholds shared by every health factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl FactorStatus {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 55.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthFactor {
    pub name: String,
    pub score: f64,
    pub status: FactorStatus,
    pub trend: Trend,
    pub recommendation: String,
}

/// Composite farm health artifact.
///
/// Recomputed fresh on every request; `overall_score` is always the
/// unweighted arithmetic mean of the factor scores, rounded to nearest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FarmHealthScore {
    pub overall_score: u8,
    pub factors: Vec<HealthFactor>,
    pub trend: Trend,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_status_boundaries_are_exact() {
        assert_eq!(FactorStatus::from_score(85.0), FactorStatus::Excellent);
        assert_eq!(FactorStatus::from_score(84.9), FactorStatus::Good);
        assert_eq!(FactorStatus::from_score(70.0), FactorStatus::Good);
        assert_eq!(FactorStatus::from_score(69.9), FactorStatus::Moderate);
        assert_eq!(FactorStatus::from_score(55.0), FactorStatus::Moderate);
        assert_eq!(FactorStatus::from_score(54.9), FactorStatus::Poor);
        assert_eq!(FactorStatus::from_score(0.0), FactorStatus::Poor);
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&FactorStatus::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(serde_json::to_string(&Trend::Improving).unwrap(), "\"improving\"");
    }
}
