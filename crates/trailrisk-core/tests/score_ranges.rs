use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trailrisk_core::{
    assess_risk, ActivityType, AssessmentRequest, EmptyCatalog, EquipmentQuality,
    ExperienceLevel, LocationRef, RiskCategory, UserAttributes, WeatherConditions,
};

fn activity() -> impl Strategy<Value = ActivityType> {
    prop::sample::select(ActivityType::ALL.to_vec())
}

fn experience() -> impl Strategy<Value = ExperienceLevel> {
    prop::sample::select(ExperienceLevel::ALL.to_vec())
}

fn equipment() -> impl Strategy<Value = EquipmentQuality> {
    prop::sample::select(EquipmentQuality::ALL.to_vec())
}

fn weather() -> impl Strategy<Value = WeatherConditions> {
    (-40.0f64..50.0, 0.0f64..100.0, 0.0f64..150.0, 0.0f64..=1.0).prop_map(
        |(temperature_c, precipitation_mm, wind_speed, thunderstorm_risk)| WeatherConditions {
            temperature_c,
            precipitation_mm,
            wind_speed,
            thunderstorm_risk,
        },
    )
}

fn location() -> impl Strategy<Value = LocationRef> {
    prop_oneof![
        (0.0f64..=10.0).prop_map(|terrain| LocationRef {
            terrain_risk: Some(terrain),
            ..LocationRef::named("Surveyed Site")
        }),
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| LocationRef::at("Uncharted", lat, lon)),
    ]
}

prop_compose! {
    fn request()(
        activity_type in activity(),
        experience in experience(),
        equipment_quality in equipment(),
        group_size in 1u32..30,
        weight_carried in 0.0f64..120.0,
        age in 1u32..110,
        height_cm in 90.0f64..220.0,
        weight_kg in 30.0f64..200.0,
        location in location(),
        weather in weather(),
    ) -> AssessmentRequest {
        AssessmentRequest {
            activity_type,
            experience,
            equipment_quality,
            group_size,
            weight_carried,
            user: UserAttributes {
                age,
                height_cm,
                weight_kg,
                gender: String::new(),
            },
            location,
            weather,
        }
    }
}

proptest! {
    /// Every factor and the overall score stay inside `[0, 10]`.
    #[test]
    fn scores_stay_in_range(req in request(), seed in any::<u64>()) {
        let report = assess_risk(&req, &EmptyCatalog, &mut StdRng::seed_from_u64(seed))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for score in report.factor_scores.as_array() {
            prop_assert!((0.0..=10.0).contains(&score), "factor out of range: {}", score);
        }
        prop_assert!((0.0..=10.0).contains(&report.overall_risk));
        prop_assert_eq!(report.risk_category, RiskCategory::from_score(report.overall_risk));
    }

    /// Identical input and seed give an identical report, recommendations included.
    #[test]
    fn reports_are_reproducible(req in request(), seed in any::<u64>()) {
        let first = assess_risk(&req, &EmptyCatalog, &mut StdRng::seed_from_u64(seed));
        let second = assess_risk(&req, &EmptyCatalog, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}
