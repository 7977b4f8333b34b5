use crate::types::{FactorScores, RiskCategory};

/// Weights for terrain, weather, human, equipment and weight, in that order.
pub const AGGREGATE_WEIGHTS: [f64; 5] = [0.20, 0.25, 0.25, 0.15, 0.15];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub overall_risk: f64,
    pub risk_category: RiskCategory,
}

pub fn weighted_risk(scores: &FactorScores) -> f64 {
    AGGREGATE_WEIGHTS
        .iter()
        .zip(scores.as_array())
        .map(|(weight, score)| weight * score)
        .sum::<f64>()
        .clamp(0.0, 10.0)
}

/// Weighted combination, then the optional site multiplier, clamped to `[0, 10]` after each step.
pub fn aggregate(scores: &FactorScores, multiplier: Option<f64>) -> Aggregate {
    let base = weighted_risk(scores);
    let overall_risk = multiplier.map_or(base, |m| (base * m).clamp(0.0, 10.0));
    Aggregate {
        overall_risk,
        risk_category: RiskCategory::from_score(overall_risk),
    }
}
