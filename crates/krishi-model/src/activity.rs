// SPDX-License-Identifier: Apache-2.0

use crate::crop::CropId;
use crate::insight::Priority;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Irrigation,
    Fertilizer,
    Pesticide,
    Weeding,
    Monitoring,
}

/// Activities are regenerated on every call and never marked done, so the
/// status is always `Pending` in this design; the other arms exist for the
/// presentation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Pending,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareActivity {
    pub id: String,
    pub crop_id: CropId,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: ActivityStatus,
    pub weather_dependent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Completed,
    Current,
    Upcoming,
}

/// One growth-stage row of a crop timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    pub stage: String,
    pub date: NaiveDate,
    pub status: TimelineStatus,
    /// 100 for completed stages, live progress for the current stage,
    /// 0 for upcoming stages.
    pub progress: u8,
    pub tip: String,
    pub actions: Vec<String>,
}
