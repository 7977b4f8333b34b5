use crate::error::AssessmentError;
use crate::types::{AssessmentRequest, NormalizedProfile, WeightClass};

/// Upper bounds in pounds for each pack weight class; anything above the last is very heavy.
pub const LIGHT_MAX_LB: f64 = 10.0;
pub const MODERATE_MAX_LB: f64 = 25.0;
pub const HEAVY_MAX_LB: f64 = 40.0;

pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> Result<f64, AssessmentError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AssessmentError::invalid(format!(
            "height must be positive, got {height_cm} cm"
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AssessmentError::invalid(format!(
            "weight must be positive, got {weight_kg} kg"
        )));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

impl WeightClass {
    pub fn from_pounds(weight_carried: f64) -> Self {
        if weight_carried <= LIGHT_MAX_LB {
            Self::Light
        } else if weight_carried <= MODERATE_MAX_LB {
            Self::Moderate
        } else if weight_carried <= HEAVY_MAX_LB {
            Self::Heavy
        } else {
            Self::VeryHeavy
        }
    }

    pub const fn factor(self) -> f64 {
        match self {
            Self::Light => 1.0,
            Self::Moderate => 1.5,
            Self::Heavy => 2.5,
            Self::VeryHeavy => 4.0,
        }
    }
}

pub fn normalize(request: &AssessmentRequest) -> Result<NormalizedProfile, AssessmentError> {
    if !request.weight_carried.is_finite() || request.weight_carried < 0.0 {
        return Err(AssessmentError::invalid(format!(
            "weight_carried must not be negative, got {}",
            request.weight_carried
        )));
    }
    Ok(NormalizedProfile {
        bmi: body_mass_index(request.user.height_cm, request.user.weight_kg)?,
        weight_class: WeightClass::from_pounds(request.weight_carried),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_uses_metres() {
        let bmi = body_mass_index(178.0, 75.0).unwrap();
        assert!((bmi - 23.671_253).abs() < 1e-5);
    }

    #[test]
    fn bmi_rejects_zero_height() {
        assert!(matches!(
            body_mass_index(0.0, 70.0),
            Err(AssessmentError::InvalidInput(_))
        ));
        assert!(body_mass_index(170.0, 0.0).is_err());
    }

    #[test]
    fn weight_class_is_a_step_function() {
        assert_eq!(WeightClass::from_pounds(0.0), WeightClass::Light);
        assert_eq!(WeightClass::from_pounds(10.0), WeightClass::Light);
        assert_eq!(WeightClass::from_pounds(10.5), WeightClass::Moderate);
        assert_eq!(WeightClass::from_pounds(25.0), WeightClass::Moderate);
        assert_eq!(WeightClass::from_pounds(40.0), WeightClass::Heavy);
        assert_eq!(WeightClass::from_pounds(40.01), WeightClass::VeryHeavy);
    }
}
