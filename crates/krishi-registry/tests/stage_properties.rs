use chrono::{Duration, NaiveDate};
use krishi_registry::stages;
use proptest::prelude::*;

fn crop_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Wheat"),
        Just("Rice"),
        Just("Cotton"),
        Just("Maize"),
        Just("Sugarcane"),
        Just("Turmeric"),
    ]
}

proptest! {
    #[test]
    fn stage_progress_is_always_a_percent(crop in crop_strategy(), offset in -50i64..500) {
        let sown = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let today = sown + Duration::days(offset);
        let progress = stages::stage_progress(crop, sown, today);
        prop_assert!(progress <= 100);
    }

    #[test]
    fn current_stage_is_always_a_table_entry(crop in crop_strategy(), offset in -50i64..500) {
        let sown = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let today = sown + Duration::days(offset);
        let stage = stages::current_stage(crop, sown, today);
        prop_assert!(stages::stage_table(crop).iter().any(|s| s.name == stage));
    }

    #[test]
    fn harvest_is_strictly_after_sowing(crop in crop_strategy()) {
        let sown = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        prop_assert!(stages::harvest_date(crop, sown) > sown);
    }
}
