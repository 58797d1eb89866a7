#![forbid(unsafe_code)]

use krishi_analytics::AnalyticsEngine;
use krishi_core::{SystemClock, ENV_KRISHI_LOG_LEVEL};
use krishi_registry::CropRegistry;
use krishi_server::{build_router, ApiConfig, AppState};
use krishi_sources::soil::SyntheticSoil;
use krishi_sources::weather::OpenMeteoWeather;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_env(ENV_KRISHI_LOG_LEVEL)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let sigterm = signal(SignalKind::terminate());
        let sigint = signal(SignalKind::interrupt());
        match (sigterm, sigint) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ApiConfig::from_env();
    init_tracing(config.log_json);

    let weather = Arc::new(OpenMeteoWeather::new());
    let soil = Arc::new(SyntheticSoil);
    let registry = Arc::new(CropRegistry::new());
    let engine = Arc::new(AnalyticsEngine::new(
        weather.clone(),
        soil,
        registry,
        Arc::new(SystemClock),
    ));

    let state = AppState {
        engine,
        weather,
        default_location: config.default_location.clone(),
    };
    let router = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|err| format!("bind {}: {err}", config.bind_addr))?;
    info!(bind = %config.bind_addr, default_location = %config.default_location, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|err| format!("server error: {err}"))
}
