// SPDX-License-Identifier: Apache-2.0

//! Daily insight generation.
//!
//! Rules are evaluated independently and several can fire at once. Unlike
//! the all-or-nothing score computations, a failed signal only suppresses
//! its own rules: weather rules need a weather reading, soil rules a soil
//! reading, and the seasonal insight needs neither.

use crate::season::seasonal_insight;
use chrono::NaiveDate;
use krishi_model::{
    insight::sort_by_priority, DailyInsight, ForecastDay, InsightCategory, Priority, Season,
    SoilReading, WeatherReading,
};

/// Forecast days examined by the rain rule.
const RAIN_LOOKAHEAD_DAYS: usize = 3;

#[must_use]
pub fn compose_insights(
    today: NaiveDate,
    local_hour: u32,
    weather: Option<&WeatherReading>,
    soil: Option<&SoilReading>,
    forecast: &[ForecastDay],
) -> Vec<DailyInsight> {
    let mut insights = Vec::new();

    if let Some(weather) = weather {
        if weather.temperature_c > 35.0 {
            insights.push(DailyInsight {
                date: today,
                priority: Priority::High,
                category: InsightCategory::Irrigation,
                title: "High Temperature Alert".to_string(),
                description: format!(
                    "Temperature is {:.0}°C. Crops need extra water.",
                    weather.temperature_c
                ),
                action: "Increase irrigation frequency. Water in early morning or evening."
                    .to_string(),
                icon: "🌡️".to_string(),
            });
        }

        if weather.humidity_pct < 40.0 {
            insights.push(DailyInsight {
                date: today,
                priority: Priority::Medium,
                category: InsightCategory::Irrigation,
                title: "Low Humidity Detected".to_string(),
                description: format!(
                    "Humidity at {:.0}% may cause water stress.",
                    weather.humidity_pct
                ),
                action: "Ensure adequate soil moisture. Consider mulching.".to_string(),
                icon: "💧".to_string(),
            });
        }
    }

    let rain_soon = forecast
        .iter()
        .take(RAIN_LOOKAHEAD_DAYS)
        .any(ForecastDay::mentions_rain);
    if rain_soon {
        insights.push(DailyInsight {
            date: today,
            priority: Priority::High,
            category: InsightCategory::Weather,
            title: "Rain Expected Soon".to_string(),
            description: "Rainfall predicted in next 2-3 days.".to_string(),
            action: "Postpone irrigation and fertilizer application. Check drainage.".to_string(),
            icon: "🌧️".to_string(),
        });
    }

    if let Some(soil) = soil {
        if soil.nitrogen == krishi_model::NutrientLevel::Low {
            insights.push(DailyInsight {
                date: today,
                priority: Priority::High,
                category: InsightCategory::Fertilizer,
                title: "Nitrogen Deficiency Detected".to_string(),
                description: "Soil nitrogen levels are low.".to_string(),
                action: "Apply urea fertilizer (120 kg/acre). Split application recommended."
                    .to_string(),
                icon: "🌱".to_string(),
            });
        }

        if soil.moisture_pct < 40.0 {
            insights.push(DailyInsight {
                date: today,
                priority: Priority::High,
                category: InsightCategory::Irrigation,
                title: "Low Soil Moisture".to_string(),
                description: format!("Soil moisture at {:.0}%.", soil.moisture_pct),
                action: "Irrigate immediately to prevent water stress.".to_string(),
                icon: "💧".to_string(),
            });
        }
    }

    insights.push(seasonal_insight(
        Season::from_month(chrono::Datelike::month(&today)),
        today,
    ));

    if let Some(weather) = weather {
        if is_fertilizer_window(local_hour, weather) {
            insights.push(DailyInsight {
                date: today,
                priority: Priority::Medium,
                category: InsightCategory::Fertilizer,
                title: "Good Time for Fertilizer Application".to_string(),
                description: "Weather conditions are favorable.".to_string(),
                action: "Apply fertilizers in the morning for better absorption.".to_string(),
                icon: "✅".to_string(),
            });
        }

        if (25.0..=32.0).contains(&weather.temperature_c) && weather.humidity_pct > 65.0 {
            insights.push(DailyInsight {
                date: today,
                priority: Priority::Medium,
                category: InsightCategory::Pest,
                title: "Moderate Pest Risk".to_string(),
                description: "Temperature and humidity favor pest activity.".to_string(),
                action: "Monitor crops closely. Check for common pests.".to_string(),
                icon: "🐛".to_string(),
            });
        }
    }

    sort_by_priority(&mut insights);
    insights
}

/// Calm mid-morning with moderate temperature.
fn is_fertilizer_window(local_hour: u32, weather: &WeatherReading) -> bool {
    (6..=10).contains(&local_hour)
        && (20.0..=30.0).contains(&weather.temperature_c)
        && weather.wind_speed_kmh < 15.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_model::{NutrientLevel, SoilStatus};
    use krishi_sources::fixtures::{forecast_day, soil_reading, weather_reading};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn hot_dry_conditions_fire_multiple_rules() {
        let weather = weather_reading(38.0, 35.0);
        let soil = soil_reading(30.0, NutrientLevel::Low, SoilStatus::Poor);
        let insights =
            compose_insights(date(2026, 8, 24), 14, Some(&weather), Some(&soil), &[]);

        let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
        assert!(titles.contains(&"High Temperature Alert"));
        assert!(titles.contains(&"Low Humidity Detected"));
        assert!(titles.contains(&"Nitrogen Deficiency Detected"));
        assert!(titles.contains(&"Low Soil Moisture"));
        assert!(titles.contains(&"Monsoon Crop Care"));
    }

    #[test]
    fn rain_in_first_three_days_only() {
        let weather = weather_reading(25.0, 60.0);
        let soil = soil_reading(60.0, NutrientLevel::Adequate, SoilStatus::Good);
        let base = date(2026, 8, 24);

        let mut forecast: Vec<_> = (0..5)
            .map(|i| forecast_day(base + chrono::Duration::days(i), 28.0, "clear sky"))
            .collect();
        forecast[4].description = "rain showers".to_string();
        let insights = compose_insights(base, 14, Some(&weather), Some(&soil), &forecast);
        assert!(!insights.iter().any(|i| i.title == "Rain Expected Soon"));

        forecast[2].description = "rain".to_string();
        let insights = compose_insights(base, 14, Some(&weather), Some(&soil), &forecast);
        assert!(insights.iter().any(|i| i.title == "Rain Expected Soon"));
    }

    #[test]
    fn fertilizer_window_needs_morning_hour_and_calm_air() {
        let calm = weather_reading(25.0, 60.0);
        let fires = |hour, weather: &WeatherReading| {
            compose_insights(date(2026, 8, 24), hour, Some(weather), None, &[])
                .iter()
                .any(|i| i.title == "Good Time for Fertilizer Application")
        };

        assert!(fires(8, &calm));
        assert!(!fires(12, &calm));

        let mut windy = calm.clone();
        windy.wind_speed_kmh = 20.0;
        assert!(!fires(8, &windy));
    }

    #[test]
    fn pest_risk_needs_warm_humid_air() {
        let insights = compose_insights(
            date(2026, 8, 24),
            14,
            Some(&weather_reading(28.0, 70.0)),
            None,
            &[],
        );
        assert!(insights.iter().any(|i| i.category == InsightCategory::Pest));
    }

    #[test]
    fn seasonal_insight_survives_total_source_failure() {
        let insights = compose_insights(date(2026, 12, 5), 14, None, None, &[]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Winter Crop Management");
        assert_eq!(insights[0].priority, Priority::Low);
    }

    #[test]
    fn output_is_sorted_by_priority() {
        let weather = weather_reading(38.0, 70.0);
        let soil = soil_reading(30.0, NutrientLevel::Low, SoilStatus::Poor);
        let insights =
            compose_insights(date(2026, 8, 24), 8, Some(&weather), Some(&soil), &[]);
        let weights: Vec<u8> = insights.iter().map(|i| i.priority.weight()).collect();
        let mut sorted = weights.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(weights, sorted);
    }
}
