// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Priority shared by daily insights and care activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight: high=3, medium=2, low=1.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Weather,
    Soil,
    Market,
    Crop,
    Irrigation,
    Fertilizer,
    Pest,
}

/// One actionable insight, regenerated fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyInsight {
    pub date: NaiveDate,
    pub priority: Priority,
    pub category: InsightCategory,
    pub title: String,
    pub description: String,
    pub action: String,
    pub icon: String,
}

/// Stable descending sort by priority weight; insertion order is preserved
/// within the same priority.
pub fn sort_by_priority(insights: &mut [DailyInsight]) {
    insights.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
}
