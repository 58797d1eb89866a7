//! Test doubles for the source ports, used across the workspace's tests.

use crate::ports::{SoilSource, WeatherSource};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use krishi_core::EngineError;
use krishi_model::{
    ForecastDay, NutrientLevel, SoilAnalysis, SoilReading, SoilStatus, WeatherReading,
};

/// Weather source that always returns the same reading and forecast.
#[derive(Debug, Clone)]
pub struct FixedWeather {
    pub reading: WeatherReading,
    pub forecast: Vec<ForecastDay>,
}

impl FixedWeather {
    #[must_use]
    pub fn new(reading: WeatherReading) -> Self {
        Self {
            reading,
            forecast: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_forecast(mut self, forecast: Vec<ForecastDay>) -> Self {
        self.forecast = forecast;
        self
    }
}

#[async_trait]
impl WeatherSource for FixedWeather {
    async fn current(&self, _location: &str) -> Result<WeatherReading, EngineError> {
        Ok(self.reading.clone())
    }

    async fn forecast(&self, _location: &str) -> Vec<ForecastDay> {
        self.forecast.clone()
    }
}

/// Weather source whose `current` always fails; forecast is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWeather;

#[async_trait]
impl WeatherSource for FailingWeather {
    async fn current(&self, location: &str) -> Result<WeatherReading, EngineError> {
        Err(EngineError::source_unavailable(format!(
            "weather unavailable for {location}"
        )))
    }

    async fn forecast(&self, _location: &str) -> Vec<ForecastDay> {
        Vec::new()
    }
}

/// Soil source that always returns the same reading and score.
#[derive(Debug, Clone)]
pub struct FixedSoil {
    pub reading: SoilReading,
    pub health_score: u8,
}

impl FixedSoil {
    #[must_use]
    pub fn new(reading: SoilReading, health_score: u8) -> Self {
        Self {
            reading,
            health_score,
        }
    }
}

#[async_trait]
impl SoilSource for FixedSoil {
    async fn health(
        &self,
        _location: &str,
        _crop: Option<&str>,
    ) -> Result<SoilReading, EngineError> {
        Ok(self.reading.clone())
    }

    async fn analysis(
        &self,
        _location: &str,
        _crop: Option<&str>,
    ) -> Result<SoilAnalysis, EngineError> {
        Ok(SoilAnalysis {
            health_score: self.health_score,
        })
    }
}

/// Soil source whose calls always fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSoil;

#[async_trait]
impl SoilSource for FailingSoil {
    async fn health(
        &self,
        location: &str,
        _crop: Option<&str>,
    ) -> Result<SoilReading, EngineError> {
        Err(EngineError::source_unavailable(format!(
            "soil unavailable for {location}"
        )))
    }

    async fn analysis(
        &self,
        location: &str,
        _crop: Option<&str>,
    ) -> Result<SoilAnalysis, EngineError> {
        Err(EngineError::source_unavailable(format!(
            "soil unavailable for {location}"
        )))
    }
}

/// Convenience reading with sensible defaults for tests.
#[must_use]
pub fn weather_reading(temperature_c: f64, humidity_pct: f64) -> WeatherReading {
    WeatherReading {
        temperature_c,
        humidity_pct,
        wind_speed_kmh: 8.0,
        pressure_hpa: 1012.0,
        feels_like_c: temperature_c,
        description: "clear sky".to_string(),
        advice: "Good weather for field activities.".to_string(),
        observed_at: DateTime::<Utc>::MIN_UTC,
    }
}

/// Convenience soil reading for tests.
#[must_use]
pub fn soil_reading(
    moisture_pct: f64,
    nitrogen: NutrientLevel,
    status: SoilStatus,
) -> SoilReading {
    SoilReading {
        ph: 6.8,
        nitrogen,
        phosphorus: NutrientLevel::Adequate,
        potassium: NutrientLevel::Adequate,
        moisture_pct,
        status,
        recommendation: "Continue balanced fertilization.".to_string(),
    }
}

/// Convenience forecast day for tests.
#[must_use]
pub fn forecast_day(date: NaiveDate, temp_c: f64, description: &str) -> ForecastDay {
    ForecastDay {
        date,
        temp_c,
        description: description.to_string(),
    }
}
