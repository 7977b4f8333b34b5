use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectedAreaKind {
    CityPark,
    StatePark,
    NationalForest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedArea {
    pub name: String,
    pub kind: ProtectedAreaKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverShare {
    pub cover: String,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCover {
    pub dominant_type: String,
    pub coverage: Vec<CoverShare>,
}

/// Descriptive site context for display; never feeds a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GisContext {
    pub elevation_m: f64,
    pub land_cover: LandCover,
    pub protected_area: Option<ProtectedArea>,
    pub nearby_trails: String,
}

impl GisContext {
    pub fn unknown() -> Self {
        Self {
            elevation_m: 1800.0,
            land_cover: LandCover {
                dominant_type: "unknown".to_string(),
                coverage: vec![CoverShare {
                    cover: "unknown".to_string(),
                    fraction: 1.0,
                }],
            },
            protected_area: None,
            nearby_trails: "Unknown".to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        self.protected_area.is_some()
    }
}
