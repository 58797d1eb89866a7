// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use krishi_analytics::{AnalyticsEngine, FALLBACK_CROP_HEALTH};
use krishi_core::{Clock, EngineError, EngineErrorCode, FixedClock};
use krishi_model::{
    CropStatus, FarmHealthScore, NewCrop, NutrientLevel, Priority, SoilAnalysis, SoilReading,
    SoilStatus, YieldLevel,
};
use krishi_registry::CropRegistry;
use krishi_sources::fixtures::{
    forecast_day, soil_reading, weather_reading, FailingSoil, FailingWeather, FixedSoil,
    FixedWeather,
};
use krishi_sources::ports::{SoilSource, WeatherSource};
use std::sync::Arc;

fn pinned_clock(instant: &str) -> Arc<dyn Clock> {
    let instant = instant.parse::<DateTime<FixedOffset>>().unwrap();
    Arc::new(FixedClock::new(instant))
}

fn engine_with(
    weather: Arc<dyn WeatherSource>,
    soil: Arc<dyn SoilSource>,
    instant: &str,
) -> AnalyticsEngine {
    AnalyticsEngine::new(
        weather,
        soil,
        Arc::new(CropRegistry::new()),
        pinned_clock(instant),
    )
}

fn good_weather() -> Arc<FixedWeather> {
    Arc::new(FixedWeather::new(weather_reading(25.0, 60.0)))
}

fn good_soil() -> Arc<FixedSoil> {
    Arc::new(FixedSoil::new(
        soil_reading(70.0, NutrientLevel::Adequate, SoilStatus::Good),
        80,
    ))
}

const NOON_IN_AUGUST: &str = "2026-08-24T12:00:00+05:30";

/// Soil source that reports dry ground only when a crop scope is given.
struct CropScopedSoil;

#[async_trait]
impl SoilSource for CropScopedSoil {
    async fn health(
        &self,
        _location: &str,
        crop: Option<&str>,
    ) -> Result<SoilReading, EngineError> {
        let moisture = if crop.is_some() { 30.0 } else { 75.0 };
        Ok(soil_reading(moisture, NutrientLevel::Adequate, SoilStatus::Good))
    }

    async fn analysis(
        &self,
        _location: &str,
        crop: Option<&str>,
    ) -> Result<SoilAnalysis, EngineError> {
        Ok(SoilAnalysis {
            health_score: if crop.is_some() { 60 } else { 85 },
        })
    }
}

#[tokio::test]
async fn farm_health_composes_four_factors() {
    let engine = engine_with(good_weather(), good_soil(), NOON_IN_AUGUST);
    let health = engine.farm_health("Pune", None).await.unwrap();

    assert_eq!(health.factors.len(), 4);
    let names: Vec<&str> = health.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Soil Quality",
            "Water Availability",
            "Weather Conditions",
            "Nutrient Balance"
        ]
    );
    assert!(health.overall_score > 0);
}

#[tokio::test]
async fn farm_health_fails_when_weather_is_down() {
    let engine = engine_with(Arc::new(FailingWeather), good_soil(), NOON_IN_AUGUST);
    let err = engine.farm_health("Pune", None).await.unwrap_err();
    assert_eq!(err.code, EngineErrorCode::SourceUnavailable);
}

#[tokio::test]
async fn farm_health_rejects_blank_location() {
    let engine = engine_with(good_weather(), good_soil(), NOON_IN_AUGUST);
    let err = engine.farm_health("   ", None).await.unwrap_err();
    assert_eq!(err.code, EngineErrorCode::InvalidInput);
}

#[tokio::test]
async fn farm_health_scopes_soil_to_the_requested_crop() {
    let engine = engine_with(good_weather(), Arc::new(CropScopedSoil), NOON_IN_AUGUST);
    let unscoped = engine.farm_health("Pune", None).await.unwrap();
    let scoped = engine.farm_health("Pune", Some("Rice")).await.unwrap();

    let water = |health: &FarmHealthScore| {
        health
            .factors
            .iter()
            .find(|f| f.name == "Water Availability")
            .unwrap()
            .score
    };
    assert_eq!(water(&unscoped), 97.5);
    assert_eq!(water(&scoped), 39.0);
    assert_ne!(unscoped.overall_score, scoped.overall_score);
}

#[tokio::test]
async fn insights_scope_soil_to_the_requested_crop() {
    let engine = engine_with(good_weather(), Arc::new(CropScopedSoil), NOON_IN_AUGUST);

    let unscoped = engine.daily_insights("Pune", None).await;
    assert!(!unscoped.iter().any(|i| i.title == "Low Soil Moisture"));

    let scoped = engine.daily_insights("Pune", Some("Rice")).await;
    assert!(scoped.iter().any(|i| i.title == "Low Soil Moisture"));
}

#[tokio::test]
async fn yield_prediction_rejects_bad_area() {
    let engine = engine_with(good_weather(), good_soil(), NOON_IN_AUGUST);
    for area in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = engine.yield_prediction("Wheat", area, "Pune").await.unwrap_err();
        assert_eq!(err.code, EngineErrorCode::InvalidInput);
    }
}

#[tokio::test]
async fn yield_prediction_survives_missing_forecast() {
    let engine = engine_with(good_weather(), good_soil(), NOON_IN_AUGUST);
    let prediction = engine.yield_prediction("Wheat", 10.0, "Pune").await.unwrap();

    assert_eq!(prediction.factors.len(), 4);
    assert!(prediction.confidence > 0);
    assert_ne!(prediction.level, YieldLevel::Low);
    assert_eq!(prediction.unit, "quintals");
}

#[tokio::test]
async fn insights_degrade_per_failed_signal() {
    let engine = engine_with(Arc::new(FailingWeather), Arc::new(FailingSoil), NOON_IN_AUGUST);
    let insights = engine.daily_insights("Pune", None).await;

    // Only the seasonal insight survives a total outage.
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].priority, Priority::Low);
    assert_eq!(insights[0].title, "Monsoon Crop Care");
}

#[tokio::test]
async fn insights_are_priority_ordered_with_live_sources() {
    let weather = Arc::new(FixedWeather::new(weather_reading(38.0, 70.0)));
    let soil = Arc::new(FixedSoil::new(
        soil_reading(30.0, NutrientLevel::Low, SoilStatus::Poor),
        50,
    ));
    let engine = engine_with(weather, soil, NOON_IN_AUGUST);
    let insights = engine.daily_insights("Pune", None).await;

    assert!(insights.len() > 1);
    for pair in insights.windows(2) {
        assert!(pair[0].priority.weight() >= pair[1].priority.weight());
    }
}

#[tokio::test]
async fn rain_in_the_forecast_reaches_the_insight_rules() {
    let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let weather = Arc::new(
        FixedWeather::new(weather_reading(25.0, 60.0))
            .with_forecast(vec![forecast_day(tomorrow, 27.0, "rain showers")]),
    );
    let engine = engine_with(weather, good_soil(), NOON_IN_AUGUST);

    let insights = engine.daily_insights("Pune", None).await;
    assert!(insights.iter().any(|i| i.title == "Rain Expected Soon"));

    // The same forecast lifts the yield outlook above the empty-forecast 60.
    let prediction = engine.yield_prediction("Wheat", 5.0, "Pune").await.unwrap();
    let outlook = prediction
        .factors
        .iter()
        .find(|f| f.name == "Forecast Outlook")
        .unwrap();
    assert_eq!(outlook.score, 80.0);
}

#[tokio::test]
async fn crop_health_falls_back_when_sources_fail() {
    let engine = engine_with(Arc::new(FailingWeather), Arc::new(FailingSoil), NOON_IN_AUGUST);
    let sown = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    assert_eq!(engine.crop_health("Rice", sown, "Pune").await, FALLBACK_CROP_HEALTH);
}

#[tokio::test]
async fn crop_health_stays_in_band_with_live_sources() {
    let engine = engine_with(good_weather(), good_soil(), NOON_IN_AUGUST);
    let sown = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    let health = engine.crop_health("Rice", sown, "Pune").await;
    assert!((50..=100).contains(&health));
}

#[tokio::test]
async fn seasonal_recommendations_follow_the_calendar() {
    let engine = engine_with(good_weather(), good_soil(), "2026-12-10T09:00:00+05:30");
    let recs = engine.seasonal_recommendations("Pune").await.unwrap();

    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0].crop, "Wheat");
    for pair in recs.windows(2) {
        assert!(pair[0].suitability >= pair[1].suitability);
    }
}

#[tokio::test]
async fn add_refresh_and_query_a_crop_end_to_end() {
    let engine = engine_with(good_weather(), good_soil(), "2025-11-10T09:00:00+05:30");
    let record = engine
        .add_crop(NewCrop {
            name: "Wheat".to_string(),
            variety: "HD-2967".to_string(),
            area_acres: 10.0,
            sowing_date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            location: "Pune".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(record.current_stage, "Sowing");
    assert!(record.expected_yield > 0.0);
    assert!((50..=100).contains(&record.health));
    assert_eq!(record.status(engine.today()), CropStatus::Active);

    let timeline = engine.crop_timeline(&record.id).await.unwrap();
    assert_eq!(timeline.len(), 7);

    let refreshed = engine.refresh_crop(&record.id).await.unwrap();
    assert_eq!(refreshed.id, record.id);

    let activities = engine.crop_activities(&record.id).await.unwrap();
    // Sowing-day DAP application falls inside the fertilizer window.
    assert!(activities.iter().any(|a| a.title.contains("DAP")));
}

#[tokio::test]
async fn add_crop_with_dead_sources_uses_fallback_estimates() {
    let engine = engine_with(
        Arc::new(FailingWeather),
        Arc::new(FailingSoil),
        "2025-11-10T09:00:00+05:30",
    );
    let record = engine
        .add_crop(NewCrop {
            name: "Wheat".to_string(),
            variety: "HD-2967".to_string(),
            area_acres: 5.0,
            sowing_date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            location: "Pune".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(record.health, FALLBACK_CROP_HEALTH);
    assert_eq!(record.expected_yield, 100.0); // 20 per acre over 5 acres
}

#[tokio::test]
async fn crop_activities_require_live_sources() {
    let registry = Arc::new(CropRegistry::new());
    let clock = pinned_clock("2025-11-10T09:00:00+05:30");
    let engine = AnalyticsEngine::new(good_weather(), good_soil(), registry.clone(), clock.clone());
    let record = engine
        .add_crop(NewCrop {
            name: "Rice".to_string(),
            variety: "Basmati".to_string(),
            area_acres: 3.0,
            sowing_date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            location: "Pune".to_string(),
        })
        .await
        .unwrap();

    // Same registry, dead weather source: the rules cannot run.
    let broken = AnalyticsEngine::new(Arc::new(FailingWeather), good_soil(), registry, clock);
    let err = broken.crop_activities(&record.id).await.unwrap_err();
    assert_eq!(err.code, EngineErrorCode::SourceUnavailable);

    let err = engine
        .crop_activities(&krishi_model::CropId::generated(999, "0123456789abcdef"))
        .await
        .unwrap_err();
    assert_eq!(err.code, EngineErrorCode::NotFound);
}
