#![forbid(unsafe_code)]

//! HTTP surface for the analytics engine.
//!
//! Thin layer: handlers validate parameters, call the engine, and translate
//! [`krishi_core::EngineError`] into the wire error envelope. No analytics
//! logic lives here.

pub mod config;
pub mod error;
pub mod handlers;
pub mod request_tracing;

pub use config::ApiConfig;
pub use error::{ApiError, ApiErrorCode};

use axum::routing::{get, post};
use axum::{middleware, Router};
use krishi_analytics::AnalyticsEngine;
use krishi_sources::ports::WeatherSource;
use std::sync::Arc;

pub const CRATE_NAME: &str = "krishi-server";

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalyticsEngine>,
    /// Probed directly by the readiness endpoint.
    pub weather: Arc<dyn WeatherSource>,
    pub default_location: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route("/readyz", get(handlers::readyz_handler))
        .route("/v1/farm/health", get(handlers::farm_health_handler))
        .route("/v1/farm/yield", get(handlers::yield_handler))
        .route("/v1/farm/insights", get(handlers::insights_handler))
        .route("/v1/farm/season", get(handlers::season_handler))
        .route("/v1/recommendations", get(handlers::recommendations_handler))
        .route(
            "/v1/crops",
            post(handlers::create_crop_handler).get(handlers::list_crops_handler),
        )
        .route(
            "/v1/crops/:id",
            get(handlers::get_crop_handler).delete(handlers::delete_crop_handler),
        )
        .route("/v1/crops/:id/refresh", post(handlers::refresh_crop_handler))
        .route("/v1/crops/:id/timeline", get(handlers::timeline_handler))
        .route(
            "/v1/crops/:id/activities",
            get(handlers::activities_handler),
        )
        .layer(middleware::from_fn(request_tracing::request_tracing))
        .with_state(state)
}
