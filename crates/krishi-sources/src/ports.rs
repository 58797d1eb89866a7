// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use krishi_core::EngineError;
use krishi_model::{ForecastDay, SoilAnalysis, SoilReading, WeatherReading};

/// Atmospheric data collaborator.
///
/// Providers are expected to fall back to a default reading internally in the
/// common failure case; an `Err` here means the source genuinely could not
/// produce anything, and all-or-nothing computations must surface it.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherReading, EngineError>;

    /// Short forecast, at most [`krishi_model::MAX_FORECAST_DAYS`] entries.
    /// Never fails; an empty sequence signals an unavailable forecast.
    async fn forecast(&self, location: &str) -> Vec<ForecastDay>;
}

/// Soil data collaborator.
#[async_trait]
pub trait SoilSource: Send + Sync {
    async fn health(
        &self,
        location: &str,
        crop: Option<&str>,
    ) -> Result<SoilReading, EngineError>;

    async fn analysis(
        &self,
        location: &str,
        crop: Option<&str>,
    ) -> Result<SoilAnalysis, EngineError>;
}
