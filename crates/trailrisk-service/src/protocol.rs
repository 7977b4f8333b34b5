use serde::{Deserialize, Serialize};
use serde_json::Value;
use trailrisk_catalog::{ForecastDay, GisContext, UserInput, WeatherInput};
use trailrisk_core::{RawAssessmentRequest, RiskReport, WeatherConditions};

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentEnvelope {
    #[serde(default)]
    pub id: Value,
    pub request: RawAssessmentRequest,
    /// Overrides `request.user` when present.
    #[serde(default)]
    pub user: Option<UserInput>,
    /// Overrides `request.weather` when present.
    #[serde(default)]
    pub weather: Option<WeatherInput>,
    #[serde(default)]
    pub forecast: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub report: RiskReport,
    pub terrain_description: String,
    pub weather_description: String,
    pub weather: WeatherConditions,
    pub gis: GisContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<ForecastDay>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AssessmentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl ResponseEnvelope {
    pub fn success(id: Value, result: AssessmentResult) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ErrorBody {
                kind: kind.into(),
                message: message.into(),
            }),
        }
    }
}
