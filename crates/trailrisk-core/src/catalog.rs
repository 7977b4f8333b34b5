/// Location knowledge the engine consumes. Implementations live outside the core.
pub trait LocationCatalog {
    fn terrain_risk(&self, name: &str) -> Option<f64>;

    /// Scalar applied to the weighted overall risk for known hazardous sites.
    fn risk_multiplier(&self, name: &str) -> Option<f64>;

    fn location_tips(&self, _name: &str) -> &[&'static str] {
        &[]
    }
}

/// Knows no locations; every terrain score comes from the coordinate fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl LocationCatalog for EmptyCatalog {
    fn terrain_risk(&self, _name: &str) -> Option<f64> {
        None
    }

    fn risk_multiplier(&self, _name: &str) -> Option<f64> {
        None
    }
}
