// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};
use krishi_model::{DailyInsight, InsightCategory, Priority, Season, SeasonalData};

/// Season snapshot for a date. Pure function of the calendar.
#[must_use]
pub fn seasonal_data(today: NaiveDate) -> SeasonalData {
    let season = Season::from_month(today.month());
    SeasonalData {
        name: season,
        greeting: season.greeting().to_string(),
        months: season.months().to_vec(),
        recommended_crops: season
            .recommended_crops()
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
        current_week: (today.ordinal() - 1) / 7,
        weather_pattern: season.weather_pattern().to_string(),
        irrigation_advice: season.irrigation_advice().to_string(),
    }
}

/// The always-appended low-priority seasonal guidance insight.
#[must_use]
pub fn seasonal_insight(season: Season, date: NaiveDate) -> DailyInsight {
    let (title, description, action) = match season {
        Season::Kharif => (
            "Monsoon Crop Care",
            "Kharif season is ideal for rice, cotton, and maize cultivation.",
            "Ensure good drainage to prevent waterlogging during heavy rains.",
        ),
        Season::Rabi => (
            "Winter Crop Management",
            "Rabi season is perfect for wheat, mustard, and chickpea.",
            "Plan irrigation schedule as rainfall is minimal in winter.",
        ),
        Season::Zaid => (
            "Summer Crop Focus",
            "Zaid season requires heat-tolerant crops like watermelon.",
            "Increase irrigation frequency due to high temperatures.",
        ),
    };
    DailyInsight {
        date,
        priority: Priority::Low,
        category: InsightCategory::Crop,
        title: title.to_string(),
        description: description.to_string(),
        action: action.to_string(),
        icon: "📅".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seasons_follow_the_calendar() {
        assert_eq!(seasonal_data(date(2026, 8, 15)).name, Season::Kharif);
        assert_eq!(seasonal_data(date(2026, 12, 15)).name, Season::Rabi);
        assert_eq!(seasonal_data(date(2026, 2, 15)).name, Season::Rabi);
        assert_eq!(seasonal_data(date(2026, 5, 15)).name, Season::Zaid);
    }

    #[test]
    fn week_index_stays_in_range() {
        assert_eq!(seasonal_data(date(2026, 1, 1)).current_week, 0);
        assert_eq!(seasonal_data(date(2026, 1, 8)).current_week, 1);
        assert!(seasonal_data(date(2026, 12, 31)).current_week <= 53);
    }

    #[test]
    fn seasonal_insight_is_always_low_priority() {
        for season in [Season::Kharif, Season::Rabi, Season::Zaid] {
            let insight = seasonal_insight(season, date(2026, 8, 24));
            assert_eq!(insight.priority, Priority::Low);
            assert_eq!(insight.category, InsightCategory::Crop);
        }
    }
}
