pub use trailrisk_catalog::units;
pub use trailrisk_catalog::{
    build_weather_source, CoverShare, ForecastDay, ForecastGenerator, GisContext,
    ImperialReading, ImperialUser, LandCover, ManualWeather, ProtectedArea, ProtectedAreaKind,
    SimulatedWeather, Site, SiteHazard, SkyCondition, StaticLocationCatalog, UserInput, WeatherError,
    WeatherInput, WeatherSource, DEFAULT_BASE_HIGH_F, DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS,
};
pub use trailrisk_core::*;
