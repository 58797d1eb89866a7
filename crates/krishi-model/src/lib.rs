#![forbid(unsafe_code)]

pub mod activity;
pub mod crop;
pub mod health;
pub mod insight;
pub mod prediction;
pub mod recommendation;
pub mod season;
pub mod soil;
pub mod weather;

pub use activity::{ActivityKind, ActivityStatus, CareActivity, TimelineEntry, TimelineStatus};
pub use crop::{CropId, CropRecord, CropStatus, NewCrop, ParseError};
pub use health::{FactorStatus, FarmHealthScore, HealthFactor, Trend};
pub use insight::{DailyInsight, InsightCategory, Priority};
pub use prediction::{Impact, YieldFactor, YieldLevel, YieldPrediction};
pub use recommendation::{CropRecommendation, ProfitPotential};
pub use season::{Season, SeasonalData};
pub use soil::{NutrientLevel, SoilAnalysis, SoilReading, SoilStatus};
pub use weather::{ForecastDay, WeatherReading, MAX_FORECAST_DAYS};

pub const CRATE_NAME: &str = "krishi-model";
