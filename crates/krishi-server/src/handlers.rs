// SPDX-License-Identifier: Apache-2.0

use crate::error::ApiError;
use crate::request_tracing::RequestId;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::Extension;
use krishi_model::{
    CareActivity, CropId, CropRecommendation, CropRecord, CropStatus, DailyInsight,
    FarmHealthScore, NewCrop, SeasonalData, TimelineEntry, YieldPrediction,
};
use serde::Deserialize;
use serde_json::{json, Value};

pub async fn healthz_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Ready when the weather source answers for the default location. The
/// synthetic soil source has no failure mode worth probing.
pub async fn readyz_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.weather.current(&state.default_location).await {
        Ok(_) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "degraded", "reason": err.to_string()})),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub location: Option<String>,
}

impl LocationQuery {
    fn resolve(self, state: &AppState) -> String {
        self.location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| state.default_location.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct FarmQuery {
    pub location: Option<String>,
    pub crop: Option<String>,
}

impl FarmQuery {
    fn split(self, state: &AppState) -> (String, Option<String>) {
        let location = LocationQuery {
            location: self.location,
        }
        .resolve(state);
        let crop = self.crop.filter(|c| !c.trim().is_empty());
        (location, crop)
    }
}

pub async fn farm_health_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<FarmQuery>,
) -> Result<Json<FarmHealthScore>, ApiError> {
    let (location, crop) = query.split(&state);
    state
        .engine
        .farm_health(&location, crop.as_deref())
        .await
        .map(Json)
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}

#[derive(Debug, Deserialize)]
pub struct YieldQuery {
    pub crop: Option<String>,
    pub area_acres: Option<f64>,
    pub location: Option<String>,
}

pub async fn yield_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<YieldQuery>,
) -> Result<Json<YieldPrediction>, ApiError> {
    let crop = query
        .crop
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::invalid_param("crop", "required", request_id.as_str()))?
        .to_string();
    let area_acres = query
        .area_acres
        .ok_or_else(|| ApiError::invalid_param("area_acres", "required", request_id.as_str()))?;
    let location = LocationQuery {
        location: query.location,
    }
    .resolve(&state);

    state
        .engine
        .yield_prediction(&crop, area_acres, &location)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}

pub async fn insights_handler(
    State(state): State<AppState>,
    Query(query): Query<FarmQuery>,
) -> Json<Vec<DailyInsight>> {
    let (location, crop) = query.split(&state);
    Json(state.engine.daily_insights(&location, crop.as_deref()).await)
}

pub async fn season_handler(State(state): State<AppState>) -> Json<SeasonalData> {
    Json(state.engine.seasonal_data())
}

pub async fn recommendations_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Vec<CropRecommendation>>, ApiError> {
    let location = query.resolve(&state);
    state
        .engine
        .seasonal_recommendations(&location)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}

pub async fn create_crop_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(new): Json<NewCrop>,
) -> Result<(StatusCode, Json<CropRecord>), ApiError> {
    state
        .engine
        .add_crop(new)
        .await
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}

#[derive(Debug, Deserialize)]
pub struct CropListQuery {
    pub status: Option<CropStatus>,
}

pub async fn list_crops_handler(
    State(state): State<AppState>,
    Query(query): Query<CropListQuery>,
) -> Json<Vec<CropRecord>> {
    let registry = state.engine.registry();
    let records = match query.status {
        Some(status) => registry.by_status(status, state.engine.today()).await,
        None => registry.get_all().await,
    };
    Json(records)
}

fn parse_crop_id(raw: &str, request_id: &RequestId) -> Result<CropId, ApiError> {
    CropId::parse(raw)
        .map_err(|err| ApiError::invalid_param("id", &err.to_string(), request_id.as_str()))
}

pub async fn get_crop_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<CropRecord>, ApiError> {
    let id = parse_crop_id(&id, &request_id)?;
    state.engine.registry().get(&id).await.map(Json).ok_or_else(|| {
        ApiError::new(
            crate::ApiErrorCode::NotFound,
            format!("no crop with id {id}"),
            Value::Null,
            request_id.as_str(),
        )
    })
}

pub async fn refresh_crop_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<CropRecord>, ApiError> {
    let id = parse_crop_id(&id, &request_id)?;
    state
        .engine
        .refresh_crop(&id)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}

pub async fn delete_crop_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_crop_id(&id, &request_id)?;
    if state.engine.registry().remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::new(
            crate::ApiErrorCode::NotFound,
            format!("no crop with id {id}"),
            Value::Null,
            request_id.as_str(),
        ))
    }
}

pub async fn timeline_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TimelineEntry>>, ApiError> {
    let id = parse_crop_id(&id, &request_id)?;
    state
        .engine
        .crop_timeline(&id)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}

pub async fn activities_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CareActivity>>, ApiError> {
    let id = parse_crop_id(&id, &request_id)?;
    state
        .engine
        .crop_activities(&id)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_engine(&err, request_id.as_str()))
}
