use rand::Rng;
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::catalog::LocationCatalog;
use crate::error::AssessmentError;
use crate::factors::{
    equipment_risk, human_risk, terrain_risk, weather_risk, weight_risk, HumanFactors,
};
use crate::profile::normalize;
use crate::recommend::{recommendations, RecommendationInput};
use crate::types::{AssessmentRequest, FactorScores, RiskReport};

pub struct RiskEngine<'c> {
    catalog: &'c dyn LocationCatalog,
}

impl<'c> RiskEngine<'c> {
    pub fn new(catalog: &'c dyn LocationCatalog) -> Self {
        Self { catalog }
    }

    /// Scores one request. `rng` is only drawn from when terrain falls back to coordinates.
    pub fn assess<R: Rng + ?Sized>(
        &self,
        request: &AssessmentRequest,
        rng: &mut R,
    ) -> Result<RiskReport, AssessmentError> {
        request.validate()?;
        let profile = normalize(request)?;
        let activity = request.activity_type;

        let scores = FactorScores {
            terrain: terrain_risk(&request.location, self.catalog, rng)?,
            weather: weather_risk(&request.weather, activity),
            human: human_risk(&HumanFactors {
                activity,
                experience: request.experience,
                group_size: request.group_size,
                age: request.user.age,
                bmi: profile.bmi,
            }),
            equipment: equipment_risk(activity, request.equipment_quality),
            weight: weight_risk(profile.weight_class, activity),
        };
        debug!(
            activity = activity.as_str(),
            location = %request.location.name,
            terrain = scores.terrain,
            weather = scores.weather,
            human = scores.human,
            equipment = scores.equipment,
            weight = scores.weight,
            "factor scores computed"
        );

        let location_name = request.location.name.as_str();
        let outcome = aggregate(&scores, self.catalog.risk_multiplier(location_name));
        let recommendations = recommendations(&RecommendationInput {
            activity,
            experience: request.experience,
            group_size: request.group_size,
            scores: &scores,
            category: outcome.risk_category,
            location_tips: self.catalog.location_tips(location_name),
        });

        info!(
            activity = activity.as_str(),
            location = location_name,
            overall_risk = outcome.overall_risk,
            category = outcome.risk_category.as_str(),
            recommendations = recommendations.len(),
            "assessment complete"
        );

        Ok(RiskReport {
            overall_risk: outcome.overall_risk,
            risk_category: outcome.risk_category,
            factor_scores: scores,
            recommendations,
            location_name: request.location.name.clone(),
            profile,
        })
    }
}

pub fn assess_risk<R: Rng + ?Sized>(
    request: &AssessmentRequest,
    catalog: &dyn LocationCatalog,
    rng: &mut R,
) -> Result<RiskReport, AssessmentError> {
    RiskEngine::new(catalog).assess(request, rng)
}
