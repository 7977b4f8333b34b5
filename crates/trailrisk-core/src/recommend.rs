//! Rule-based advisory generation.
//!
//! Rules run in a fixed order and only ever append: activity tips first, then
//! every threshold rule that fires, then the site's own tips. The resulting
//! order is part of the output contract.

use crate::types::{ActivityType, ExperienceLevel, FactorScores, RiskCategory};

pub const TERRAIN_THRESHOLD: f64 = 6.0;
pub const WEATHER_THRESHOLD: f64 = 5.0;
pub const HUMAN_THRESHOLD: f64 = 6.0;
pub const EQUIPMENT_THRESHOLD: f64 = 5.0;
pub const WEIGHT_THRESHOLD: f64 = 5.0;

pub const CHALLENGING_TERRAIN: &str =
    "This terrain is particularly challenging. Consider an alternative route if inexperienced.";
pub const DETERIORATING_WEATHER: &str = "Weather conditions may deteriorate. Prepare for changing conditions and consider postponing if severe.";
pub const SEEK_GUIDANCE: &str =
    "Consider going with a more experienced guide or taking a training course first.";
pub const UPGRADE_EQUIPMENT: &str =
    "Upgrade your equipment or perform thorough maintenance before undertaking this activity.";
pub const REDUCE_WEIGHT: &str = "Consider reducing the weight you are carrying to minimize risk.";
pub const SOLO_TRAVEL: &str = "Solo activities increase risk. Share your itinerary with someone and consider a satellite communication device.";
pub const SIGNIFICANT_RISK: &str = "This activity presents significant risks. Carefully reconsider or ensure advanced preparation and experience.";

impl ActivityType {
    pub const fn base_tips(self) -> &'static [&'static str] {
        match self {
            Self::Hiking => &["Carry adequate water and navigation tools."],
            Self::RockClimbing => &[
                "Double-check all safety equipment before climbing.",
                "Ensure proper anchoring and belay techniques.",
            ],
            Self::MountainBiking => &[
                "Wear appropriate protective gear including helmet.",
                "Check bike mechanics before riding.",
            ],
            Self::BackcountrySkiing => &[
                "Check avalanche conditions before departure.",
                "Carry avalanche safety equipment.",
            ],
            Self::Kayaking => &[
                "Always wear a personal flotation device.",
                "Check water conditions and forecasts.",
            ],
            Self::TrailRunning => &[
                "Carry adequate water and snacks.",
                "Be aware of potential hazards such as wildlife and inclement weather.",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub activity: ActivityType,
    pub experience: ExperienceLevel,
    pub group_size: u32,
    pub scores: &'a FactorScores,
    pub category: RiskCategory,
    pub location_tips: &'a [&'static str],
}

pub fn recommendations(input: &RecommendationInput<'_>) -> Vec<String> {
    let scores = input.scores;
    let threshold_rules = [
        (scores.terrain > TERRAIN_THRESHOLD, CHALLENGING_TERRAIN),
        (scores.weather > WEATHER_THRESHOLD, DETERIORATING_WEATHER),
        (
            scores.human > HUMAN_THRESHOLD && input.experience.is_novice(),
            SEEK_GUIDANCE,
        ),
        (scores.equipment > EQUIPMENT_THRESHOLD, UPGRADE_EQUIPMENT),
        (scores.weight > WEIGHT_THRESHOLD, REDUCE_WEIGHT),
        (input.group_size == 1, SOLO_TRAVEL),
        (input.category.is_severe(), SIGNIFICANT_RISK),
    ];

    input
        .activity
        .base_tips()
        .iter()
        .copied()
        .chain(
            threshold_rules
                .into_iter()
                .filter_map(|(fires, text)| fires.then_some(text)),
        )
        .chain(input.location_tips.iter().copied())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> FactorScores {
        FactorScores {
            terrain: 2.0,
            weather: 1.0,
            human: 2.0,
            equipment: 2.0,
            weight: 2.0,
        }
    }

    #[test]
    fn calm_group_outing_only_gets_activity_tips() {
        let scores = calm();
        let out = recommendations(&RecommendationInput {
            activity: ActivityType::Kayaking,
            experience: ExperienceLevel::Advanced,
            group_size: 3,
            scores: &scores,
            category: RiskCategory::Low,
            location_tips: &[],
        });
        assert_eq!(
            out,
            vec![
                "Always wear a personal flotation device.",
                "Check water conditions and forecasts.",
            ]
        );
    }

    #[test]
    fn every_rule_fires_in_declared_order() {
        let scores = FactorScores {
            terrain: 6.5,
            weather: 5.5,
            human: 7.0,
            equipment: 6.0,
            weight: 5.1,
        };
        let out = recommendations(&RecommendationInput {
            activity: ActivityType::Hiking,
            experience: ExperienceLevel::Beginner,
            group_size: 1,
            scores: &scores,
            category: RiskCategory::High,
            location_tips: &["Bring a park map."],
        });
        assert_eq!(
            out,
            vec![
                "Carry adequate water and navigation tools.",
                CHALLENGING_TERRAIN,
                DETERIORATING_WEATHER,
                SEEK_GUIDANCE,
                UPGRADE_EQUIPMENT,
                REDUCE_WEIGHT,
                SOLO_TRAVEL,
                SIGNIFICANT_RISK,
                "Bring a park map.",
            ]
        );
    }

    #[test]
    fn experienced_users_skip_guide_advice() {
        let scores = FactorScores {
            human: 9.0,
            ..calm()
        };
        let out = recommendations(&RecommendationInput {
            activity: ActivityType::RockClimbing,
            experience: ExperienceLevel::Expert,
            group_size: 2,
            scores: &scores,
            category: RiskCategory::Moderate,
            location_tips: &[],
        });
        assert!(!out.iter().any(|r| r == SEEK_GUIDANCE));
    }

    #[test]
    fn thresholds_are_strict() {
        let scores = FactorScores {
            terrain: 6.0,
            weather: 5.0,
            human: 6.0,
            equipment: 5.0,
            weight: 5.0,
        };
        let out = recommendations(&RecommendationInput {
            activity: ActivityType::TrailRunning,
            experience: ExperienceLevel::Beginner,
            group_size: 2,
            scores: &scores,
            category: RiskCategory::Moderate,
            location_tips: &[],
        });
        assert_eq!(out.len(), ActivityType::TrailRunning.base_tips().len());
    }

    #[test]
    fn duplicate_tips_are_kept() {
        let scores = calm();
        let out = recommendations(&RecommendationInput {
            activity: ActivityType::Hiking,
            experience: ExperienceLevel::Advanced,
            group_size: 2,
            scores: &scores,
            category: RiskCategory::Low,
            location_tips: &["Carry adequate water and navigation tools."],
        });
        assert_eq!(out.len(), 2);
        assert_eq!(out.first(), out.last());
    }
}
