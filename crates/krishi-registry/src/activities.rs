// SPDX-License-Identifier: Apache-2.0

//! Care-activity generation.
//!
//! Candidate activities come from independent rules over the crop's stage and
//! the current weather/soil readings. They are regenerated on every call and
//! never persisted, so `status` is always pending.

use crate::stages::days_since_sowing;
use chrono::{DateTime, Duration, Utc};
use krishi_model::{
    ActivityKind, ActivityStatus, CareActivity, CropRecord, Priority, SoilReading, WeatherReading,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerApplication {
    pub stage: &'static str,
    pub fertilizer: &'static str,
    pub days_from_sowing: i64,
    pub description: &'static str,
    pub priority: Priority,
}

/// Days either side of a scheduled application during which it is surfaced.
pub const FERTILIZER_WINDOW_DAYS: i64 = 2;

pub const WHEAT_FERTILIZER: &[FertilizerApplication] = &[
    FertilizerApplication {
        stage: "basal",
        fertilizer: "DAP",
        days_from_sowing: 0,
        description: "Apply DAP at sowing",
        priority: Priority::High,
    },
    FertilizerApplication {
        stage: "tillering",
        fertilizer: "Urea",
        days_from_sowing: 25,
        description: "First top dressing with urea",
        priority: Priority::High,
    },
    FertilizerApplication {
        stage: "flowering",
        fertilizer: "Urea",
        days_from_sowing: 80,
        description: "Second top dressing",
        priority: Priority::Medium,
    },
];

pub const RICE_FERTILIZER: &[FertilizerApplication] = &[
    FertilizerApplication {
        stage: "basal",
        fertilizer: "DAP",
        days_from_sowing: 0,
        description: "Apply DAP before transplanting",
        priority: Priority::High,
    },
    FertilizerApplication {
        stage: "tillering",
        fertilizer: "Urea",
        days_from_sowing: 40,
        description: "First nitrogen dose",
        priority: Priority::High,
    },
    FertilizerApplication {
        stage: "panicle",
        fertilizer: "Urea + MOP",
        days_from_sowing: 65,
        description: "Apply urea and potash",
        priority: Priority::High,
    },
];

#[must_use]
pub fn fertilizer_schedule(crop: &str) -> &'static [FertilizerApplication] {
    match crop.to_lowercase().as_str() {
        "wheat" => WHEAT_FERTILIZER,
        "rice" => RICE_FERTILIZER,
        _ => {
            warn!(crop = %crop, "no fertilizer schedule for crop; using wheat defaults");
            WHEAT_FERTILIZER
        }
    }
}

/// Build the candidate activity list for one crop from current conditions,
/// sorted by priority weight descending (stable within a priority).
#[must_use]
pub fn upcoming_activities(
    crop: &CropRecord,
    weather: &WeatherReading,
    soil: &SoilReading,
    now: DateTime<Utc>,
) -> Vec<CareActivity> {
    let mut activities = Vec::new();
    let today = now.date_naive();
    let elapsed = days_since_sowing(crop.sowing_date, today);

    if soil.moisture_pct < 50.0 {
        activities.push(CareActivity {
            id: format!("activity-irr-{}", crop.id),
            crop_id: crop.id.clone(),
            kind: ActivityKind::Irrigation,
            title: "Irrigation Required".to_string(),
            description: format!(
                "Soil moisture is {:.0}%. Water the crop.",
                soil.moisture_pct
            ),
            due_date: now + Duration::hours(24),
            priority: Priority::High,
            status: ActivityStatus::Pending,
            weather_dependent: true,
        });
    }

    for application in fertilizer_schedule(&crop.name) {
        let window = (application.days_from_sowing - FERTILIZER_WINDOW_DAYS)
            ..=(application.days_from_sowing + FERTILIZER_WINDOW_DAYS);
        if window.contains(&elapsed) {
            let due = crop.sowing_date + Duration::days(application.days_from_sowing);
            activities.push(CareActivity {
                id: format!("activity-fert-{}-{}", application.stage, crop.id),
                crop_id: crop.id.clone(),
                kind: ActivityKind::Fertilizer,
                title: format!("Apply {}", application.fertilizer),
                description: application.description.to_string(),
                due_date: due.and_time(chrono::NaiveTime::MIN).and_utc(),
                priority: application.priority,
                status: ActivityStatus::Pending,
                weather_dependent: false,
            });
        }
    }

    if (25.0..=32.0).contains(&weather.temperature_c) && weather.humidity_pct > 65.0 {
        activities.push(CareActivity {
            id: format!("activity-pest-{}", crop.id),
            crop_id: crop.id.clone(),
            kind: ActivityKind::Monitoring,
            title: "Pest Monitoring".to_string(),
            description: "Weather conditions favor pest activity. Inspect crops.".to_string(),
            due_date: now + Duration::hours(12),
            priority: Priority::Medium,
            status: ActivityStatus::Pending,
            weather_dependent: true,
        });
    }

    if is_weeding_stage(&crop.current_stage) && elapsed >= 21 {
        activities.push(CareActivity {
            id: format!("activity-weed-{}", crop.id),
            crop_id: crop.id.clone(),
            kind: ActivityKind::Weeding,
            title: "Weeding Required".to_string(),
            description: "Remove weeds to prevent competition for nutrients.".to_string(),
            due_date: now + Duration::hours(48),
            priority: Priority::Medium,
            status: ActivityStatus::Pending,
            weather_dependent: false,
        });
    }

    activities.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
    activities
}

/// Weeding applies during early vegetative growth.
fn is_weeding_stage(stage: &str) -> bool {
    matches!(
        stage.to_lowercase().as_str(),
        "germination" | "vegetative" | "growth"
    )
}
