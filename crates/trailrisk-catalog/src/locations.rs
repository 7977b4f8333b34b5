use trailrisk_core::{LocationCatalog, LocationRef};

use crate::gis::{CoverShare, GisContext, LandCover, ProtectedArea, ProtectedAreaKind};

/// Known hazard that scales a site's overall risk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteHazard {
    pub risk_multiplier: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Site {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub terrain_risk: f64,
    pub hazard: Option<SiteHazard>,
    pub tips: &'static [&'static str],
    pub elevation_m: f64,
    pub dominant_cover: &'static str,
    pub coverage: &'static [(&'static str, f64)],
    pub protected_area: Option<(&'static str, ProtectedAreaKind)>,
    pub nearby_trails: &'static str,
    /// Typical daytime high in °F used to seed forecasts.
    pub base_high_f: f64,
}

impl Site {
    pub fn location(&self) -> LocationRef {
        LocationRef::at(self.name, self.latitude, self.longitude)
    }

    pub fn gis_context(&self) -> GisContext {
        GisContext {
            elevation_m: self.elevation_m,
            land_cover: LandCover {
                dominant_type: self.dominant_cover.to_string(),
                coverage: self
                    .coverage
                    .iter()
                    .map(|(cover, fraction)| CoverShare {
                        cover: (*cover).to_string(),
                        fraction: *fraction,
                    })
                    .collect(),
            },
            protected_area: self.protected_area.map(|(name, kind)| ProtectedArea {
                name: name.to_string(),
                kind,
            }),
            nearby_trails: self.nearby_trails.to_string(),
        }
    }
}

pub const DEFAULT_BASE_HIGH_F: f64 = 75.0;

static PIKES_PEAK_REGION: [Site; 5] = [
    Site {
        name: "Garden of the Gods",
        latitude: 38.8783,
        longitude: -104.8719,
        terrain_risk: 6.2,
        hazard: None,
        tips: &["Be aware of rockfall hazards and stay on designated trails."],
        elevation_m: 1950.0,
        dominant_cover: "rock",
        coverage: &[("rock", 0.5), ("forest", 0.3), ("grassland", 0.2)],
        protected_area: Some(("Garden of the Gods Park", ProtectedAreaKind::CityPark)),
        nearby_trails: "15 trails within 0.6 miles",
        base_high_f: DEFAULT_BASE_HIGH_F,
    },
    Site {
        name: "Pikes Peak",
        latitude: 38.8409,
        longitude: -105.0423,
        terrain_risk: 8.7,
        hazard: None,
        tips: &[
            "Altitude sickness is common. Acclimate properly and stay hydrated.",
            "Weather can change rapidly at high elevations.",
        ],
        elevation_m: 4302.0,
        dominant_cover: "alpine",
        coverage: &[("rock", 0.4), ("snow", 0.3), ("alpine", 0.3)],
        protected_area: Some(("Pike National Forest", ProtectedAreaKind::NationalForest)),
        nearby_trails: "8 trails within 0.5 miles",
        base_high_f: 55.0,
    },
    Site {
        name: "Cheyenne Mountain",
        latitude: 38.7447,
        longitude: -104.8506,
        terrain_risk: 7.3,
        hazard: None,
        tips: &["Wildlife encounters are possible. Maintain safe distances and proper food storage."],
        elevation_m: 2800.0,
        dominant_cover: "forest",
        coverage: &[("forest", 0.7), ("rock", 0.2), ("grassland", 0.1)],
        protected_area: Some(("Cheyenne Mountain State Park", ProtectedAreaKind::StatePark)),
        nearby_trails: "12 trails within 0.8 miles",
        base_high_f: 65.0,
    },
    Site {
        name: "Palmer Park",
        latitude: 38.8937,
        longitude: -104.7836,
        terrain_risk: 4.5,
        hazard: None,
        tips: &["Trail intersections can be confusing. Bring a park map."],
        elevation_m: 1850.0,
        dominant_cover: "mixed",
        coverage: &[("forest", 0.4), ("grassland", 0.4), ("shrubland", 0.2)],
        protected_area: Some(("Palmer Park", ProtectedAreaKind::CityPark)),
        nearby_trails: "20 trails within 0.6 miles",
        base_high_f: DEFAULT_BASE_HIGH_F,
    },
    Site {
        name: "Manitou Incline",
        latitude: 38.8574,
        longitude: -104.9324,
        terrain_risk: 9.5,
        hazard: Some(SiteHazard {
            risk_multiplier: 1.8,
        }),
        tips: &[
            "Be prepared for steep incline and potential altitude sickness.",
            "Bring plenty of water and consider acclimating to the elevation before attempting.",
        ],
        elevation_m: 2400.0,
        dominant_cover: "forest",
        coverage: &[("forest", 0.6), ("rock", 0.3), ("grassland", 0.1)],
        protected_area: Some(("Manitou Incline Park", ProtectedAreaKind::CityPark)),
        nearby_trails: "10 trails within 0.6 miles",
        base_high_f: DEFAULT_BASE_HIGH_F,
    },
];

/// Fixed table of surveyed sites, matched by exact name.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationCatalog {
    sites: &'static [Site],
}

impl StaticLocationCatalog {
    pub const fn new(sites: &'static [Site]) -> Self {
        Self { sites }
    }

    pub const fn pikes_peak_region() -> Self {
        Self::new(&PIKES_PEAK_REGION)
    }

    pub fn site(&self, name: &str) -> Option<&'static Site> {
        self.sites.iter().find(|site| site.name == name)
    }

    pub fn sites(&self) -> &'static [Site] {
        self.sites
    }

    pub fn coordinates(&self, name: &str) -> Option<(f64, f64)> {
        self.site(name).map(|site| (site.latitude, site.longitude))
    }

    /// Known sites get their surveyed record; anything else gets [`GisContext::unknown`].
    pub fn gis_context(&self, name: &str) -> GisContext {
        self.site(name)
            .map_or_else(GisContext::unknown, Site::gis_context)
    }

    pub fn base_high_f(&self, name: &str) -> f64 {
        self.site(name)
            .map_or(DEFAULT_BASE_HIGH_F, |site| site.base_high_f)
    }

    /// Fills in coordinates for a known site when the caller only supplied a name.
    pub fn resolve(&self, location: &LocationRef) -> LocationRef {
        match (self.coordinates(&location.name), location.latitude) {
            (Some((latitude, longitude)), None) => LocationRef {
                latitude: Some(latitude),
                longitude: Some(longitude),
                ..location.clone()
            },
            _ => location.clone(),
        }
    }
}

impl Default for StaticLocationCatalog {
    fn default() -> Self {
        Self::pikes_peak_region()
    }
}

impl LocationCatalog for StaticLocationCatalog {
    fn terrain_risk(&self, name: &str) -> Option<f64> {
        self.site(name).map(|site| site.terrain_risk)
    }

    fn risk_multiplier(&self, name: &str) -> Option<f64> {
        self.site(name)
            .and_then(|site| site.hazard)
            .map(|hazard| hazard.risk_multiplier)
    }

    fn location_tips(&self, name: &str) -> &[&'static str] {
        match self.site(name) {
            Some(site) => site.tips,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_terrain_and_multiplier() {
        let catalog = StaticLocationCatalog::pikes_peak_region();
        assert_eq!(catalog.terrain_risk("Garden of the Gods"), Some(6.2));
        assert_eq!(catalog.risk_multiplier("Garden of the Gods"), None);
        assert_eq!(catalog.risk_multiplier("Manitou Incline"), Some(1.8));
        assert_eq!(catalog.terrain_risk("Mount Elbert"), None);
    }

    #[test]
    fn tips_are_empty_for_unknown_sites() {
        let catalog = StaticLocationCatalog::pikes_peak_region();
        assert_eq!(catalog.location_tips("Pikes Peak").len(), 2);
        assert!(catalog.location_tips("Mount Elbert").is_empty());
    }

    #[test]
    fn unknown_site_gets_placeholder_context() {
        let catalog = StaticLocationCatalog::pikes_peak_region();
        let context = catalog.gis_context("Mount Elbert");
        assert_eq!(context, GisContext::unknown());
        assert!(!context.is_protected());

        let known = catalog.gis_context("Pikes Peak");
        assert!((known.elevation_m - 4302.0).abs() < f64::EPSILON);
        assert_eq!(known.land_cover.dominant_type, "alpine");
        assert!(known.is_protected());
    }

    #[test]
    fn coverage_fractions_sum_to_one() {
        for site in StaticLocationCatalog::pikes_peak_region().sites() {
            let total: f64 = site.coverage.iter().map(|(_, f)| f).sum();
            assert!((total - 1.0).abs() < 1e-9, "{}", site.name);
        }
    }

    #[test]
    fn resolve_fills_coordinates_only_when_missing() {
        let catalog = StaticLocationCatalog::pikes_peak_region();
        let resolved = catalog.resolve(&LocationRef::named("Palmer Park"));
        assert_eq!(resolved.latitude, Some(38.8937));
        assert_eq!(resolved.longitude, Some(-104.7836));

        let custom = LocationRef::at("Palmer Park", 1.0, 2.0);
        assert_eq!(catalog.resolve(&custom), custom);
    }
}
