//! Independent 0–10 factor calculators.
//!
//! Every calculator is pure except [`terrain_risk`], whose coordinate fallback
//! draws a single jitter sample from the generator the caller passes in.

use rand::Rng;

use crate::catalog::LocationCatalog;
use crate::error::AssessmentError;
use crate::types::{
    ActivityType, EquipmentQuality, ExperienceLevel, LocationRef, WeatherConditions, WeightClass,
};

pub const MAX_SCORE: f64 = 10.0;
pub const MAX_WEATHER_SCORE: f64 = 9.5;
pub const MIN_FALLBACK_TERRAIN: f64 = 2.0;
pub const MAX_FALLBACK_TERRAIN: f64 = 9.5;

const HUMAN_SCALE: f64 = 1.2;
const COMFORT_TEMPERATURE_C: f64 = 20.0;

/// Upper bound (exclusive) and modifier per BMI band, ascending.
const BMI_BANDS: [(f64, f64); 4] = [
    (18.5, 1.2),
    (25.0, 1.0),
    (30.0, 1.2),
    (f64::INFINITY, 1.5),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityProfile {
    pub base_difficulty: f64,
    pub weather_sensitivity: f64,
    pub equipment_importance: f64,
    pub weight_sensitivity: f64,
}

impl ActivityType {
    pub const fn profile(self) -> ActivityProfile {
        let (base_difficulty, weather_sensitivity, equipment_importance, weight_sensitivity) =
            match self {
                Self::Hiking => (2.0, 0.7, 0.5, 0.8),
                Self::RockClimbing => (4.0, 0.9, 0.9, 0.7),
                Self::MountainBiking => (3.0, 0.6, 0.8, 0.4),
                Self::BackcountrySkiing => (4.0, 0.95, 0.9, 0.6),
                Self::Kayaking => (3.0, 0.8, 0.7, 0.3),
                Self::TrailRunning => (2.5, 0.75, 0.6, 0.85),
            };
        ActivityProfile {
            base_difficulty,
            weather_sensitivity,
            equipment_importance,
            weight_sensitivity,
        }
    }
}

impl ExperienceLevel {
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Beginner => 1.5,
            Self::Intermediate => 1.0,
            Self::Advanced => 0.7,
            Self::Expert => 0.5,
        }
    }
}

impl EquipmentQuality {
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Poor => 2.0,
            Self::Basic => 1.5,
            Self::Good => 1.0,
            Self::Excellent => 0.8,
        }
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, MAX_SCORE)
}

pub fn terrain_risk<R: Rng + ?Sized>(
    location: &LocationRef,
    catalog: &dyn LocationCatalog,
    rng: &mut R,
) -> Result<f64, AssessmentError> {
    if let Some(precomputed) = location.terrain_risk {
        return Ok(clamp_score(precomputed));
    }
    if let Some(known) = catalog.terrain_risk(&location.name) {
        return Ok(clamp_score(known));
    }
    match (location.latitude, location.longitude) {
        (Some(latitude), Some(longitude)) => Ok(fallback_terrain_risk(
            latitude,
            longitude,
            rng.gen::<f64>(),
        )),
        _ => Err(AssessmentError::invalid(format!(
            "location {:?} is not in the catalog and has no coordinates",
            location.name
        ))),
    }
}

/// Coordinate heuristic for unknown sites; `jitter` is a sample from `[0, 1)`.
pub fn fallback_terrain_risk(latitude: f64, longitude: f64, jitter: f64) -> f64 {
    let lat_factor = latitude.abs() / 90.0;
    let lon_factor = longitude.abs() / 180.0;
    (5.0 * lat_factor + 3.0 * lon_factor + 2.0 * jitter)
        .clamp(MIN_FALLBACK_TERRAIN, MAX_FALLBACK_TERRAIN)
}

pub fn weather_risk(weather: &WeatherConditions, activity: ActivityType) -> f64 {
    let temperature = (weather.temperature_c - COMFORT_TEMPERATURE_C).abs() / 5.0;
    let precipitation = weather.precipitation_mm * 0.5;
    let wind = weather.wind_speed * 0.1;
    let thunder = weather.thunderstorm_risk * 10.0;
    let raw = (temperature + precipitation + wind + thunder)
        * activity.profile().weather_sensitivity;
    raw.clamp(0.0, MAX_WEATHER_SCORE)
}

pub const fn group_size_factor(group_size: u32) -> f64 {
    match group_size {
        0 | 1 => 1.5,
        2..=4 => 1.0,
        5..=8 => 1.2,
        _ => 1.4,
    }
}

/// Integer-year buckets; the arms are disjoint and cover every age.
pub const fn age_modifier(age: u32) -> f64 {
    match age {
        0..=50 => 1.0,
        51..=65 => 1.2,
        _ => 1.5,
    }
}

pub fn bmi_modifier(bmi: f64) -> f64 {
    BMI_BANDS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map_or(1.5, |(_, modifier)| *modifier)
}

#[derive(Debug, Clone, Copy)]
pub struct HumanFactors {
    pub activity: ActivityType,
    pub experience: ExperienceLevel,
    pub group_size: u32,
    pub age: u32,
    pub bmi: f64,
}

pub fn human_risk(factors: &HumanFactors) -> f64 {
    let raw = factors.activity.profile().base_difficulty
        * factors.experience.modifier()
        * group_size_factor(factors.group_size)
        * age_modifier(factors.age)
        * bmi_modifier(factors.bmi)
        * HUMAN_SCALE;
    clamp_score(raw)
}

pub fn equipment_risk(activity: ActivityType, quality: EquipmentQuality) -> f64 {
    clamp_score(5.0 * activity.profile().equipment_importance * quality.modifier())
}

pub fn weight_risk(weight_class: WeightClass, activity: ActivityType) -> f64 {
    clamp_score(2.0 * weight_class.factor() * activity.profile().weight_sensitivity)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::EmptyCatalog;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    struct OneSite;

    impl LocationCatalog for OneSite {
        fn terrain_risk(&self, name: &str) -> Option<f64> {
            (name == "Palmer Park").then_some(4.5)
        }

        fn risk_multiplier(&self, _name: &str) -> Option<f64> {
            None
        }
    }

    #[test]
    fn group_size_boundaries() {
        assert!(approx(group_size_factor(1), 1.5));
        assert!(approx(group_size_factor(2), 1.0));
        assert!(approx(group_size_factor(4), 1.0));
        assert!(approx(group_size_factor(5), 1.2));
        assert!(approx(group_size_factor(8), 1.2));
        assert!(approx(group_size_factor(9), 1.4));
        assert!(approx(group_size_factor(40), 1.4));
    }

    #[test]
    fn age_buckets_cover_boundaries() {
        assert!(approx(age_modifier(12), 1.0));
        assert!(approx(age_modifier(30), 1.0));
        assert!(approx(age_modifier(36), 1.0));
        assert!(approx(age_modifier(50), 1.0));
        assert!(approx(age_modifier(51), 1.2));
        assert!(approx(age_modifier(65), 1.2));
        assert!(approx(age_modifier(66), 1.5));
        assert!(approx(age_modifier(130), 1.5));
    }

    #[test]
    fn bmi_bands_are_ascending_and_half_open() {
        assert!(BMI_BANDS.windows(2).all(|pair| match pair {
            [(a, _), (b, _)] => a < b,
            _ => false,
        }));
        assert!(approx(bmi_modifier(17.0), 1.2));
        assert!(approx(bmi_modifier(18.5), 1.0));
        assert!(approx(bmi_modifier(24.99), 1.0));
        assert!(approx(bmi_modifier(25.0), 1.2));
        assert!(approx(bmi_modifier(30.0), 1.5));
        assert!(approx(bmi_modifier(120.0), 1.5));
    }

    #[test]
    fn weather_risk_for_calm_day() {
        let weather = WeatherConditions {
            temperature_c: 20.0,
            precipitation_mm: 0.0,
            wind_speed: 5.0,
            thunderstorm_risk: 0.0,
        };
        assert!(approx(weather_risk(&weather, ActivityType::Hiking), 0.35));
    }

    #[test]
    fn weather_risk_caps_below_ten() {
        let storm = WeatherConditions {
            temperature_c: -15.0,
            precipitation_mm: 30.0,
            wind_speed: 60.0,
            thunderstorm_risk: 1.0,
        };
        let score = weather_risk(&storm, ActivityType::BackcountrySkiing);
        assert!(approx(score, MAX_WEATHER_SCORE));
    }

    #[test]
    fn human_risk_saturates_at_ten() {
        let score = human_risk(&HumanFactors {
            activity: ActivityType::RockClimbing,
            experience: ExperienceLevel::Beginner,
            group_size: 1,
            age: 70,
            bmi: 32.0,
        });
        assert!(approx(score, MAX_SCORE));
    }

    #[test]
    fn equipment_and_weight_scores() {
        assert!(approx(
            equipment_risk(ActivityType::Hiking, EquipmentQuality::Good),
            2.5
        ));
        assert!(approx(
            equipment_risk(ActivityType::RockClimbing, EquipmentQuality::Poor),
            9.0
        ));
        assert!(approx(
            weight_risk(WeightClass::Moderate, ActivityType::Hiking),
            2.4
        ));
        assert!(approx(
            weight_risk(WeightClass::VeryHeavy, ActivityType::TrailRunning),
            6.8
        ));
    }

    #[test]
    fn terrain_prefers_precomputed_then_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut location = LocationRef::named("Palmer Park");
        assert!(approx(
            terrain_risk(&location, &OneSite, &mut rng).unwrap(),
            4.5
        ));

        location.terrain_risk = Some(7.7);
        assert!(approx(
            terrain_risk(&location, &OneSite, &mut rng).unwrap(),
            7.7
        ));
    }

    #[test]
    fn terrain_fallback_is_deterministic_for_a_seed() {
        let location = LocationRef::at("Unnamed Ridge", 46.85, -121.76);
        let first = terrain_risk(&location, &EmptyCatalog, &mut StdRng::seed_from_u64(42)).unwrap();
        let second =
            terrain_risk(&location, &EmptyCatalog, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(approx(first, second));
        assert!((MIN_FALLBACK_TERRAIN..=MAX_FALLBACK_TERRAIN).contains(&first));
    }

    #[test]
    fn terrain_fallback_formula_and_clamp() {
        assert!(approx(fallback_terrain_risk(45.0, -90.0, 0.5), 5.0));
        assert!(approx(fallback_terrain_risk(0.0, 0.0, 0.0), MIN_FALLBACK_TERRAIN));
        assert!(approx(
            fallback_terrain_risk(90.0, 180.0, 0.99),
            MAX_FALLBACK_TERRAIN
        ));
    }

    #[test]
    fn unknown_location_without_coordinates_is_invalid() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = terrain_risk(&LocationRef::named("Nowhere"), &EmptyCatalog, &mut rng)
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }
}
