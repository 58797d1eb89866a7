#![forbid(unsafe_code)]

//! In-memory crop registry.
//!
//! The registry is an explicitly constructed, owned instance handed to the
//! analytics engine and the HTTP layer; there is no module-level singleton.
//! It is the only mutable shared store in the system, and every mutation is
//! atomic with respect to the lock and immediately visible to readers.

pub mod activities;
pub mod stages;

use chrono::{DateTime, NaiveDate, Utc};
use krishi_core::{stable_hash_hex, EngineError};
use krishi_model::{
    CareActivity, CropId, CropRecord, CropStatus, NewCrop, SoilReading, TimelineEntry,
    TimelineStatus, WeatherReading,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub const CRATE_NAME: &str = "krishi-registry";

#[derive(Debug, Default)]
pub struct CropRegistry {
    crops: RwLock<BTreeMap<CropId, CropRecord>>,
    next_seq: AtomicU64,
}

impl CropRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a crop record. Stage, progress, and harvest date are
    /// derived here; yield and health are computed by the caller (they need
    /// source data the registry does not fetch).
    pub async fn add(
        &self,
        new: NewCrop,
        expected_yield: f64,
        yield_unit: String,
        health: u8,
        now: DateTime<Utc>,
    ) -> Result<CropRecord, EngineError> {
        validate_new_crop(&new)?;

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let hash = stable_hash_hex(format!("{}|{}|{seq}", new.name, new.location).as_bytes());
        let id = CropId::generated(seq, &hash);

        let today = now.date_naive();
        let record = CropRecord {
            expected_harvest: stages::harvest_date(&new.name, new.sowing_date),
            current_stage: stages::current_stage(&new.name, new.sowing_date, today).to_string(),
            stage_progress: stages::stage_progress(&new.name, new.sowing_date, today),
            id: id.clone(),
            name: new.name,
            variety: new.variety,
            area_acres: new.area_acres,
            sowing_date: new.sowing_date,
            health,
            expected_yield,
            yield_unit,
            location: new.location,
            last_updated: now,
        };

        self.crops.write().await.insert(id, record.clone());
        Ok(record)
    }

    pub async fn get(&self, id: &CropId) -> Option<CropRecord> {
        self.crops.read().await.get(id).cloned()
    }

    pub async fn get_all(&self) -> Vec<CropRecord> {
        self.crops.read().await.values().cloned().collect()
    }

    pub async fn by_status(&self, status: CropStatus, today: NaiveDate) -> Vec<CropRecord> {
        self.crops
            .read()
            .await
            .values()
            .filter(|crop| crop.status(today) == status)
            .cloned()
            .collect()
    }

    /// Recompute the derived fields of a record in place.
    pub async fn refresh(
        &self,
        id: &CropId,
        health: u8,
        now: DateTime<Utc>,
    ) -> Result<CropRecord, EngineError> {
        let mut crops = self.crops.write().await;
        let record = crops
            .get_mut(id)
            .ok_or_else(|| EngineError::not_found(format!("no crop with id {id}")))?;

        let today = now.date_naive();
        record.current_stage =
            stages::current_stage(&record.name, record.sowing_date, today).to_string();
        record.stage_progress = stages::stage_progress(&record.name, record.sowing_date, today);
        record.health = health;
        record.last_updated = now;
        Ok(record.clone())
    }

    /// Remove a record; true if it existed.
    pub async fn remove(&self, id: &CropId) -> bool {
        self.crops.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.crops.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.crops.read().await.is_empty()
    }

    /// Full growth-stage timeline for a crop: past stages completed, the
    /// matching current stage carries live progress, later stages upcoming.
    pub async fn timeline(
        &self,
        id: &CropId,
        today: NaiveDate,
    ) -> Result<Vec<TimelineEntry>, EngineError> {
        let record = self
            .get(id)
            .await
            .ok_or_else(|| EngineError::not_found(format!("no crop with id {id}")))?;
        Ok(build_timeline(&record, today))
    }

    /// Candidate care activities for a crop given current conditions.
    pub async fn upcoming_activities(
        &self,
        id: &CropId,
        weather: &WeatherReading,
        soil: &SoilReading,
        now: DateTime<Utc>,
    ) -> Result<Vec<CareActivity>, EngineError> {
        let record = self
            .get(id)
            .await
            .ok_or_else(|| EngineError::not_found(format!("no crop with id {id}")))?;
        Ok(activities::upcoming_activities(&record, weather, soil, now))
    }
}

fn validate_new_crop(new: &NewCrop) -> Result<(), EngineError> {
    for (field, value) in [
        ("name", &new.name),
        ("variety", &new.variety),
        ("location", &new.location),
    ] {
        if value.trim().is_empty() {
            return Err(EngineError::invalid_input(format!(
                "{field} must not be empty"
            )));
        }
        if value.len() > krishi_model::crop::NAME_MAX_LEN {
            return Err(EngineError::invalid_input(format!(
                "{field} exceeds max length {}",
                krishi_model::crop::NAME_MAX_LEN
            )));
        }
    }
    if !new.area_acres.is_finite() || new.area_acres <= 0.0 {
        return Err(EngineError::invalid_input(format!(
            "area_acres must be positive, got {}",
            new.area_acres
        )));
    }
    Ok(())
}

/// Timeline derivation for one record.
#[must_use]
pub fn build_timeline(record: &CropRecord, today: NaiveDate) -> Vec<TimelineEntry> {
    stages::stage_table(&record.name)
        .iter()
        .map(|stage| {
            let date = record.sowing_date + chrono::Duration::days(stage.days_from_sowing);
            let (status, progress) = if stage.name == record.current_stage {
                (TimelineStatus::Current, record.stage_progress)
            } else if date < today {
                (TimelineStatus::Completed, 100)
            } else {
                (TimelineStatus::Upcoming, 0)
            };
            TimelineEntry {
                stage: stage.name.to_string(),
                date,
                status,
                progress,
                tip: stage.tip.to_string(),
                actions: stage.actions.iter().map(|a| (*a).to_string()).collect(),
            }
        })
        .collect()
}
