#![forbid(unsafe_code)]

//! Derived-analytics engine.
//!
//! [`AnalyticsEngine`] owns the fan-out to the weather and soil sources and
//! composes their readings into the farm-level artifacts. Computations that
//! produce a score are all-or-nothing: a failed required signal fails the
//! whole request. Insight generation is lenient and degrades per signal.

pub mod crop_health;
pub mod health;
pub mod insights;
pub mod prediction;
pub mod recommend;
pub mod score;
pub mod season;

pub use crop_health::FALLBACK_CROP_HEALTH;

use chrono::{NaiveDate, Utc};
use krishi_core::{Clock, EngineError};
use krishi_model::{
    CareActivity, CropId, CropRecord, CropRecommendation, DailyInsight, FarmHealthScore, NewCrop,
    Season, SeasonalData, TimelineEntry, YieldPrediction,
};
use krishi_registry::{stages, CropRegistry};
use krishi_sources::ports::{SoilSource, WeatherSource};
use std::sync::Arc;
use tracing::warn;

pub const CRATE_NAME: &str = "krishi-analytics";

pub struct AnalyticsEngine {
    weather: Arc<dyn WeatherSource>,
    soil: Arc<dyn SoilSource>,
    registry: Arc<CropRegistry>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsEngine {
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        soil: Arc<dyn SoilSource>,
        registry: Arc<CropRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            weather,
            soil,
            registry,
            clock,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CropRegistry {
        &self.registry
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Four-factor farm health for a location, optionally scoped to one
    /// crop's soil profile. All three signals are required; any source
    /// failure fails the request.
    pub async fn farm_health(
        &self,
        location: &str,
        crop: Option<&str>,
    ) -> Result<FarmHealthScore, EngineError> {
        let location = validated_location(location)?;
        let (weather, soil, analysis) = tokio::try_join!(
            self.weather.current(location),
            self.soil.health(location, crop),
            self.soil.analysis(location, crop),
        )?;
        let now = self.clock.now().with_timezone(&Utc);
        Ok(health::compose_farm_health(&weather, &soil, &analysis, now))
    }

    /// Yield prediction for a crop over an area. Weather and soil are
    /// required; a missing forecast degrades to the neutral outlook.
    pub async fn yield_prediction(
        &self,
        crop: &str,
        area_acres: f64,
        location: &str,
    ) -> Result<YieldPrediction, EngineError> {
        let location = validated_location(location)?;
        if crop.trim().is_empty() {
            return Err(EngineError::invalid_input("crop must not be empty"));
        }
        if !area_acres.is_finite() || area_acres <= 0.0 {
            return Err(EngineError::invalid_input(format!(
                "area_acres must be positive, got {area_acres}"
            )));
        }

        let (weather, soil, forecast) = tokio::join!(
            self.weather.current(location),
            self.soil.health(location, Some(crop)),
            self.weather.forecast(location),
        );
        let weather = weather?;
        let soil = soil?;
        Ok(prediction::compose_yield_prediction(
            crop, area_acres, &weather, &soil, &forecast,
        ))
    }

    /// Today's insights, optionally scoped to one crop's soil profile.
    /// Never fails: each unavailable signal is logged and its rules are
    /// skipped, and the seasonal insight is always present.
    pub async fn daily_insights(&self, location: &str, crop: Option<&str>) -> Vec<DailyInsight> {
        let (weather, soil, forecast) = tokio::join!(
            self.weather.current(location),
            self.soil.health(location, crop),
            self.weather.forecast(location),
        );
        let weather = weather
            .map_err(|err| warn!(%location, error = %err, "weather unavailable for insights"))
            .ok();
        let soil = soil
            .map_err(|err| warn!(%location, error = %err, "soil unavailable for insights"))
            .ok();
        insights::compose_insights(
            self.clock.today(),
            self.clock.hour(),
            weather.as_ref(),
            soil.as_ref(),
            &forecast,
        )
    }

    /// Season snapshot for today.
    #[must_use]
    pub fn seasonal_data(&self) -> SeasonalData {
        season::seasonal_data(self.clock.today())
    }

    /// Per-crop health score. Degrades to [`FALLBACK_CROP_HEALTH`] when a
    /// source cannot be reached.
    pub async fn crop_health(&self, crop: &str, sowing_date: NaiveDate, location: &str) -> u8 {
        let (weather, soil) = tokio::join!(
            self.weather.current(location),
            self.soil.health(location, Some(crop)),
        );
        match (weather, soil) {
            (Ok(weather), Ok(soil)) => {
                let days = stages::days_since_sowing(sowing_date, self.clock.today());
                crop_health::compose_crop_health(crop, days, &weather, &soil)
            }
            (weather, soil) => {
                for err in [weather.err(), soil.err()].into_iter().flatten() {
                    warn!(%crop, %location, error = %err, "source failure; using fallback crop health");
                }
                FALLBACK_CROP_HEALTH
            }
        }
    }

    /// Crops ranked for the current season at a location.
    pub async fn seasonal_recommendations(
        &self,
        location: &str,
    ) -> Result<Vec<CropRecommendation>, EngineError> {
        let location = validated_location(location)?;
        let (weather, soil) = tokio::try_join!(
            self.weather.current(location),
            self.soil.health(location, None),
        )?;
        let season = Season::from_month(chrono::Datelike::month(&self.clock.today()));
        Ok(recommend::compose_recommendations(season, &weather, &soil))
    }

    /// Register a crop: derives its yield estimate and health from current
    /// conditions, then stores the record. Source failures degrade to the
    /// base yield estimate and fallback health rather than failing the add.
    pub async fn add_crop(&self, new: NewCrop) -> Result<CropRecord, EngineError> {
        let (weather, soil, forecast) = tokio::join!(
            self.weather.current(&new.location),
            self.soil.health(&new.location, Some(&new.name)),
            self.weather.forecast(&new.location),
        );
        let now = self.clock.now().with_timezone(&Utc);
        let unit = score::yield_unit(&new.name).to_string();

        let (expected_yield, health) = match (weather, soil) {
            (Ok(weather), Ok(soil)) => {
                let prediction = prediction::compose_yield_prediction(
                    &new.name,
                    new.area_acres,
                    &weather,
                    &soil,
                    &forecast,
                );
                let days = stages::days_since_sowing(new.sowing_date, self.clock.today());
                let health = crop_health::compose_crop_health(&new.name, days, &weather, &soil);
                (prediction.expected_yield, health)
            }
            (weather, soil) => {
                for err in [weather.err(), soil.err()].into_iter().flatten() {
                    warn!(crop = %new.name, error = %err, "source failure; registering crop with fallback estimates");
                }
                let base_estimate = (score::base_yield(&new.name) * new.area_acres).round();
                (base_estimate, FALLBACK_CROP_HEALTH)
            }
        };

        self.registry.add(new, expected_yield, unit, health, now).await
    }

    /// Recompute a stored crop's stage, progress, and health.
    pub async fn refresh_crop(&self, id: &CropId) -> Result<CropRecord, EngineError> {
        let record = self
            .registry
            .get(id)
            .await
            .ok_or_else(|| EngineError::not_found(format!("no crop with id {id}")))?;
        let health = self
            .crop_health(&record.name, record.sowing_date, &record.location)
            .await;
        let now = self.clock.now().with_timezone(&Utc);
        self.registry.refresh(id, health, now).await
    }

    /// Growth-stage timeline for a stored crop.
    pub async fn crop_timeline(&self, id: &CropId) -> Result<Vec<TimelineEntry>, EngineError> {
        self.registry.timeline(id, self.clock.today()).await
    }

    /// Care activities for a stored crop given current conditions. Both
    /// sources are required here: the rules read live weather and soil.
    pub async fn crop_activities(&self, id: &CropId) -> Result<Vec<CareActivity>, EngineError> {
        let record = self
            .registry
            .get(id)
            .await
            .ok_or_else(|| EngineError::not_found(format!("no crop with id {id}")))?;
        let (weather, soil) = tokio::try_join!(
            self.weather.current(&record.location),
            self.soil.health(&record.location, Some(&record.name)),
        )?;
        let now = self.clock.now().with_timezone(&Utc);
        self.registry.upcoming_activities(id, &weather, &soil, now).await
    }
}

fn validated_location(location: &str) -> Result<&str, EngineError> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_input("location must not be empty"));
    }
    Ok(trimmed)
}
