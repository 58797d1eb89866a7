use chrono::{NaiveDate, TimeZone, Utc};
use krishi_model::{ActivityKind, ActivityStatus, NewCrop, NutrientLevel, Priority, SoilStatus};
use krishi_registry::CropRegistry;
use krishi_sources::fixtures::{soil_reading, weather_reading};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now_at(today: NaiveDate) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(&today.and_time(chrono::NaiveTime::MIN))
}

async fn wheat_registry(sown: NaiveDate) -> (CropRegistry, krishi_model::CropId) {
    let registry = CropRegistry::new();
    let record = registry
        .add(
            NewCrop {
                name: "Wheat".to_string(),
                variety: "HD-2967".to_string(),
                area_acres: 5.0,
                sowing_date: sown,
                location: "Delhi".to_string(),
            },
            100.0,
            "quintals".to_string(),
            80,
            now_at(sown),
        )
        .await
        .unwrap();
    (registry, record.id)
}

#[tokio::test]
async fn dry_soil_produces_high_priority_irrigation_due_next_day() {
    let sown = date(2025, 11, 10);
    let (registry, id) = wheat_registry(sown).await;
    let now = now_at(date(2025, 12, 20));

    let weather = weather_reading(22.0, 50.0);
    let soil = soil_reading(35.0, NutrientLevel::Adequate, SoilStatus::Fair);
    let activities = registry
        .upcoming_activities(&id, &weather, &soil, now)
        .await
        .unwrap();

    let irrigation = activities
        .iter()
        .find(|a| a.kind == ActivityKind::Irrigation)
        .expect("irrigation activity");
    assert_eq!(irrigation.priority, Priority::High);
    assert_eq!(irrigation.status, ActivityStatus::Pending);
    assert_eq!(irrigation.due_date, now + chrono::Duration::hours(24));
    assert!(irrigation.weather_dependent);
}

#[tokio::test]
async fn fertilizer_fires_inside_two_day_window_only() {
    let sown = date(2025, 11, 10);
    let (registry, id) = wheat_registry(sown).await;
    let weather = weather_reading(22.0, 50.0);
    let soil = soil_reading(60.0, NutrientLevel::Adequate, SoilStatus::Good);

    // Day 27 is within the +-2 window of the day-25 urea dressing.
    let inside = registry
        .upcoming_activities(&id, &weather, &soil, now_at(date(2025, 12, 7)))
        .await
        .unwrap();
    assert!(inside.iter().any(|a| a.kind == ActivityKind::Fertilizer
        && a.title == "Apply Urea"));

    // Day 30 is outside every window.
    let outside = registry
        .upcoming_activities(&id, &weather, &soil, now_at(date(2025, 12, 10)))
        .await
        .unwrap();
    assert!(!outside.iter().any(|a| a.kind == ActivityKind::Fertilizer));
}

#[tokio::test]
async fn warm_humid_weather_triggers_pest_monitoring() {
    let sown = date(2025, 11, 10);
    let (registry, id) = wheat_registry(sown).await;
    let now = now_at(date(2025, 12, 20));
    let soil = soil_reading(60.0, NutrientLevel::Adequate, SoilStatus::Good);

    let humid = registry
        .upcoming_activities(&id, &weather_reading(28.0, 70.0), &soil, now)
        .await
        .unwrap();
    assert!(humid.iter().any(|a| a.kind == ActivityKind::Monitoring));

    let cool = registry
        .upcoming_activities(&id, &weather_reading(20.0, 70.0), &soil, now)
        .await
        .unwrap();
    assert!(!cool.iter().any(|a| a.kind == ActivityKind::Monitoring));
}

#[tokio::test]
async fn weeding_requires_vegetative_stage_and_three_weeks_elapsed() {
    let sown = date(2025, 11, 10);
    let (registry, id) = wheat_registry(sown).await;
    let weather = weather_reading(22.0, 50.0);
    let soil = soil_reading(60.0, NutrientLevel::Adequate, SoilStatus::Good);

    // Day 22: wheat is in Germination (a weeding stage) and past 21 days.
    let day22 = now_at(date(2025, 12, 2));
    registry.refresh(&id, 80, day22).await.unwrap();
    let eligible = registry
        .upcoming_activities(&id, &weather, &soil, day22)
        .await
        .unwrap();
    assert!(eligible.iter().any(|a| a.kind == ActivityKind::Weeding));

    // Day 40: Tillering is not a weeding stage.
    let day40 = now_at(date(2025, 12, 20));
    registry.refresh(&id, 80, day40).await.unwrap();
    let ineligible = registry
        .upcoming_activities(&id, &weather, &soil, day40)
        .await
        .unwrap();
    assert!(!ineligible.iter().any(|a| a.kind == ActivityKind::Weeding));
}

#[tokio::test]
async fn activities_are_sorted_high_priority_first() {
    let sown = date(2025, 11, 10);
    let (registry, id) = wheat_registry(sown).await;
    // Day 25: urea window open; add dry soil and pest weather for a full set.
    let now = now_at(date(2025, 12, 5));
    registry.refresh(&id, 80, now).await.unwrap();
    let activities = registry
        .upcoming_activities(
            &id,
            &weather_reading(28.0, 70.0),
            &soil_reading(35.0, NutrientLevel::Low, SoilStatus::Poor),
            now,
        )
        .await
        .unwrap();

    assert!(activities.len() >= 3);
    let weights: Vec<u8> = activities.iter().map(|a| a.priority.weight()).collect();
    let mut sorted = weights.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(weights, sorted, "activities must be sorted by priority");
}
