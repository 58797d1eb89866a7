// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_MAX_LEN: usize = 64;
pub const NAME_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Opaque crop record identifier, generated by the registry on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CropId(String);

impl CropId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("crop_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("crop_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("crop_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    /// Canonical generated form: a registry sequence number plus a short
    /// stable-hash suffix so ids stay opaque but deterministic in tests.
    #[must_use]
    pub fn generated(seq: u64, hash_hex: &str) -> Self {
        let suffix: String = hash_hex.chars().take(8).collect();
        Self(format!("crop-{seq:04}-{suffix}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CropId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creation request for a crop record; everything else is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCrop {
    pub name: String,
    pub variety: String,
    pub area_acres: f64,
    pub sowing_date: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    Active,
    Completed,
}

/// A user-added crop under management.
///
/// Owned exclusively by the registry; analytics only reads. Stage, progress,
/// health, harvest date, and yield are all derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropRecord {
    pub id: CropId,
    pub name: String,
    pub variety: String,
    pub area_acres: f64,
    pub sowing_date: NaiveDate,
    pub expected_harvest: NaiveDate,
    pub current_stage: String,
    /// Percent of the way through the current stage, `[0, 100]`.
    pub stage_progress: u8,
    /// Derived health percent, `[0, 100]`; recomputed on demand.
    pub health: u8,
    pub expected_yield: f64,
    pub yield_unit: String,
    pub location: String,
    pub last_updated: DateTime<Utc>,
}

impl CropRecord {
    #[must_use]
    pub fn status(&self, today: NaiveDate) -> CropStatus {
        if self.expected_harvest > today {
            CropStatus::Active
        } else {
            CropStatus::Completed
        }
    }
}
