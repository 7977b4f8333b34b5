use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Hiking,
    RockClimbing,
    MountainBiking,
    BackcountrySkiing,
    Kayaking,
    TrailRunning,
}

impl ActivityType {
    pub const ALL: [Self; 6] = [
        Self::Hiking,
        Self::RockClimbing,
        Self::MountainBiking,
        Self::BackcountrySkiing,
        Self::Kayaking,
        Self::TrailRunning,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hiking => "hiking",
            Self::RockClimbing => "rock_climbing",
            Self::MountainBiking => "mountain_biking",
            Self::BackcountrySkiing => "backcountry_skiing",
            Self::Kayaking => "kayaking",
            Self::TrailRunning => "trail_running",
        }
    }

    /// Title-cased label, e.g. "Rock Climbing".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hiking => "Hiking",
            Self::RockClimbing => "Rock Climbing",
            Self::MountainBiking => "Mountain Biking",
            Self::BackcountrySkiing => "Backcountry Skiing",
            Self::Kayaking => "Kayaking",
            Self::TrailRunning => "Trail Running",
        }
    }
}

impl FromStr for ActivityType {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == s)
            .ok_or_else(|| AssessmentError::unknown("activity_type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    pub const fn is_novice(self) -> bool {
        matches!(self, Self::Beginner | Self::Intermediate)
    }
}

impl FromStr for ExperienceLevel {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AssessmentError::unknown("experience", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentQuality {
    Poor,
    Basic,
    Good,
    Excellent,
}

impl EquipmentQuality {
    pub const ALL: [Self; 4] = [Self::Poor, Self::Basic, Self::Good, Self::Excellent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Basic => "basic",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl FromStr for EquipmentQuality {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.as_str() == s)
            .ok_or_else(|| AssessmentError::unknown("equipment_quality", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    Light,
    Moderate,
    Heavy,
    VeryHeavy,
}

impl WeightClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::VeryHeavy => "very_heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskCategory {
    /// Half-open bands: `[0,3)` low, `[3,6)` moderate, `[6,8)` high, `[8,10]` extreme.
    pub fn from_score(score: f64) -> Self {
        if score < 3.0 {
            Self::Low
        } else if score < 6.0 {
            Self::Moderate
        } else if score < 8.0 {
            Self::High
        } else {
            Self::Extreme
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }

    pub const fn is_severe(self) -> bool {
        matches!(self, Self::High | Self::Extreme)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    ActivityType,
    ExperienceLevel,
    EquipmentQuality,
    WeightClass,
    RiskCategory
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Display only; never feeds a score.
    #[serde(default)]
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Precomputed terrain risk; takes precedence over the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain_risk: Option<f64>,
}

impl LocationRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude: None,
            longitude: None,
            terrain_risk: None,
        }
    }

    pub fn at(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::named(name)
        }
    }
}

/// Missing fields fall back to the calm defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConditions {
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed: f64,
    pub thunderstorm_risk: f64,
}

impl Default for WeatherConditions {
    fn default() -> Self {
        Self {
            temperature_c: 20.0,
            precipitation_mm: 0.0,
            wind_speed: 0.0,
            thunderstorm_risk: 0.0,
        }
    }
}

impl WeatherConditions {
    pub fn validate(&self) -> Result<(), AssessmentError> {
        ensure_finite("weather.temperature_c", self.temperature_c)?;
        ensure_non_negative("weather.precipitation_mm", self.precipitation_mm)?;
        ensure_non_negative("weather.wind_speed", self.wind_speed)?;
        ensure_finite("weather.thunderstorm_risk", self.thunderstorm_risk)?;
        if !(0.0..=1.0).contains(&self.thunderstorm_risk) {
            return Err(AssessmentError::invalid(format!(
                "weather.thunderstorm_risk must be within [0, 1], got {}",
                self.thunderstorm_risk
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub activity_type: ActivityType,
    pub experience: ExperienceLevel,
    pub equipment_quality: EquipmentQuality,
    pub group_size: u32,
    /// Pounds.
    pub weight_carried: f64,
    pub user: UserAttributes,
    pub location: LocationRef,
    pub weather: WeatherConditions,
}

impl AssessmentRequest {
    /// Checks every numeric field; enum fields are valid by construction.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        if self.group_size == 0 {
            return Err(AssessmentError::invalid("group_size must be at least 1"));
        }
        ensure_non_negative("weight_carried", self.weight_carried)?;
        if self.user.age == 0 {
            return Err(AssessmentError::invalid("user.age must be positive"));
        }
        ensure_positive("user.height_cm", self.user.height_cm)?;
        ensure_positive("user.weight_kg", self.user.weight_kg)?;
        if self.location.name.trim().is_empty() {
            return Err(AssessmentError::invalid("location.name is required"));
        }
        if let Some(latitude) = self.location.latitude {
            ensure_finite("location.latitude", latitude)?;
        }
        if let Some(longitude) = self.location.longitude {
            ensure_finite("location.longitude", longitude)?;
        }
        if let Some(terrain) = self.location.terrain_risk {
            ensure_finite("location.terrain_risk", terrain)?;
            if !(0.0..=10.0).contains(&terrain) {
                return Err(AssessmentError::invalid(format!(
                    "location.terrain_risk must be within [0, 10], got {terrain}"
                )));
            }
        }
        self.weather.validate()
    }
}

/// String-typed request as it arrives from a form or the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAssessmentRequest {
    pub activity_type: String,
    pub experience: String,
    pub equipment_quality: String,
    pub group_size: u32,
    pub weight_carried: f64,
    /// May be left out when the caller supplies body measurements separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserAttributes>,
    pub location: LocationRef,
    #[serde(default)]
    pub weather: WeatherConditions,
}

impl TryFrom<RawAssessmentRequest> for AssessmentRequest {
    type Error = AssessmentError;

    fn try_from(raw: RawAssessmentRequest) -> Result<Self, Self::Error> {
        let request = Self {
            activity_type: raw.activity_type.trim().parse()?,
            experience: raw.experience.trim().parse()?,
            equipment_quality: raw.equipment_quality.trim().parse()?,
            group_size: raw.group_size,
            weight_carried: raw.weight_carried,
            user: raw
                .user
                .ok_or_else(|| AssessmentError::invalid("user is required"))?,
            location: raw.location,
            weather: raw.weather,
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub terrain: f64,
    pub weather: f64,
    pub human: f64,
    pub equipment: f64,
    pub weight: f64,
}

impl FactorScores {
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.terrain,
            self.weather,
            self.human,
            self.equipment,
            self.weight,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub bmi: f64,
    pub weight_class: WeightClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub overall_risk: f64,
    pub risk_category: RiskCategory,
    pub factor_scores: FactorScores,
    pub recommendations: Vec<String>,
    pub location_name: String,
    pub profile: NormalizedProfile,
}

fn ensure_finite(field: &str, value: f64) -> Result<(), AssessmentError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AssessmentError::invalid(format!("{field} must be a finite number")))
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<(), AssessmentError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(AssessmentError::invalid(format!(
            "{field} must be positive, got {value}"
        )))
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), AssessmentError> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AssessmentError::invalid(format!(
            "{field} must not be negative, got {value}"
        )))
    }
}
