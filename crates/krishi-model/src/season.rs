// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Indian cropping season, a pure function of the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// `month` is 1-based (chrono convention): Jul-Oct is Kharif,
    /// Nov-Mar is Rabi, Apr-Jun is Zaid.
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            7..=10 => Self::Kharif,
            11 | 12 | 1..=3 => Self::Rabi,
            _ => Self::Zaid,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kharif => "Kharif",
            Self::Rabi => "Rabi",
            Self::Zaid => "Zaid",
        }
    }

    #[must_use]
    pub const fn months(self) -> &'static [u32] {
        match self {
            Self::Kharif => &[7, 8, 9, 10],
            Self::Rabi => &[11, 12, 1, 2, 3],
            Self::Zaid => &[4, 5, 6],
        }
    }

    #[must_use]
    pub const fn greeting(self) -> &'static str {
        match self {
            Self::Kharif => "Monsoon Season Planning",
            Self::Rabi => "Winter Crop Season",
            Self::Zaid => "Summer Crop Season",
        }
    }

    #[must_use]
    pub const fn recommended_crops(self) -> &'static [&'static str] {
        match self {
            Self::Kharif => &["Rice", "Cotton", "Maize", "Sorghum", "Bajra"],
            Self::Rabi => &["Wheat", "Barley", "Mustard", "Chickpea", "Lentil"],
            Self::Zaid => &["Watermelon", "Cucumber", "Muskmelon", "Vegetables"],
        }
    }

    #[must_use]
    pub const fn weather_pattern(self) -> &'static str {
        match self {
            Self::Kharif => "Heavy rainfall expected. Monsoon season.",
            Self::Rabi => "Cool and dry weather. Minimal rainfall.",
            Self::Zaid => "Hot and dry. High temperatures.",
        }
    }

    #[must_use]
    pub const fn irrigation_advice(self) -> &'static str {
        match self {
            Self::Kharif => "Ensure proper drainage. May not need irrigation.",
            Self::Rabi => "Regular irrigation needed. 3-4 times per season.",
            Self::Zaid => "Frequent irrigation essential. Daily watering may be needed.",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season snapshot handed to the presentation layer. No persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonalData {
    pub name: Season,
    pub greeting: String,
    pub months: Vec<u32>,
    pub recommended_crops: Vec<String>,
    /// Week index within the year, `[0, 53]`.
    pub current_week: u32,
    pub weather_pattern: String,
    pub irrigation_advice: String,
}
