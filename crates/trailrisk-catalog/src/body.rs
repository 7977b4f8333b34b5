use serde::{Deserialize, Serialize};
use trailrisk_core::UserAttributes;

use crate::units::{inches_to_cm, pounds_to_kg};

/// Body measurements as a US form collects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImperialUser {
    pub age: u32,
    pub height_in: f64,
    pub weight_lb: f64,
    #[serde(default)]
    pub gender: String,
}

impl ImperialUser {
    pub fn to_metric(&self) -> UserAttributes {
        UserAttributes {
            age: self.age,
            height_cm: inches_to_cm(self.height_in),
            weight_kg: pounds_to_kg(self.weight_lb),
            gender: self.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "units", rename_all = "snake_case")]
pub enum UserInput {
    Metric(UserAttributes),
    Imperial(ImperialUser),
}

impl UserInput {
    pub fn into_metric(self) -> UserAttributes {
        match self {
            Self::Metric(user) => user,
            Self::Imperial(user) => user.to_metric(),
        }
    }
}
