use std::io::{self, Write};

use trailrisk_catalog::units::{celsius_to_fahrenheit, metres_to_feet};

use crate::protocol::{AssessmentResult, ErrorBody};

pub fn write_report<W: Write>(out: &mut W, result: &AssessmentResult) -> io::Result<()> {
    let report = &result.report;
    let scores = &report.factor_scores;

    writeln!(out, "OUTDOOR ACTIVITY RISK ASSESSMENT")?;
    writeln!(out, "================================")?;
    writeln!(out, "Location: {}", report.location_name)?;
    writeln!(
        out,
        "Risk Level: {} ({:.1}/10)",
        report.risk_category.as_str().to_ascii_uppercase(),
        report.overall_risk
    )?;

    writeln!(out, "\nRisk Factors:")?;
    writeln!(
        out,
        "  - Terrain: {:.1} ({})",
        scores.terrain, result.terrain_description
    )?;
    writeln!(
        out,
        "  - Weather: {:.1} ({})",
        scores.weather, result.weather_description
    )?;
    writeln!(out, "  - Human Factors: {:.1}", scores.human)?;
    writeln!(out, "  - Equipment: {:.1}", scores.equipment)?;
    writeln!(out, "  - Weight: {:.1}", scores.weight)?;

    let weather = &result.weather;
    writeln!(out, "\nWeather Conditions:")?;
    writeln!(
        out,
        "  - Temperature: {:.1}°C ({:.0}°F)",
        weather.temperature_c,
        celsius_to_fahrenheit(weather.temperature_c)
    )?;
    writeln!(out, "  - Precipitation: {:.1} mm", weather.precipitation_mm)?;
    writeln!(out, "  - Wind Speed: {:.1}", weather.wind_speed)?;
    writeln!(
        out,
        "  - Thunderstorm Risk: {:.0}%",
        weather.thunderstorm_risk * 100.0
    )?;

    let gis = &result.gis;
    writeln!(out, "\nSite Context:")?;
    writeln!(out, "  - Elevation: {:.0} ft", metres_to_feet(gis.elevation_m))?;
    writeln!(out, "  - Dominant Land Cover: {}", gis.land_cover.dominant_type)?;
    writeln!(
        out,
        "  - Protected Area: {}",
        gis.protected_area
            .as_ref()
            .map_or("None", |area| area.name.as_str())
    )?;
    writeln!(out, "  - Nearby Trails: {}", gis.nearby_trails)?;
    writeln!(out, "  - BMI: {:.1}", report.profile.bmi)?;

    if let Some(forecast) = &result.forecast {
        writeln!(out, "\nForecast:")?;
        for day in forecast {
            writeln!(
                out,
                "  - {} {}: {}°F / {}°F, {}, {}% precip",
                day.day,
                day.label,
                day.temp_high_f,
                day.temp_low_f,
                day.condition.label(),
                day.precip_chance
            )?;
        }
    }

    writeln!(out, "\nRecommendations:")?;
    for (i, rec) in report.recommendations.iter().enumerate() {
        writeln!(out, "  {}. {rec}", i + 1)?;
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, error: &ErrorBody) -> io::Result<()> {
    writeln!(out, "error [{}]: {}", error.kind, error.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_names_the_kind() {
        let mut out = Vec::new();
        write_error(
            &mut out,
            &ErrorBody {
                kind: "invalid_input".to_string(),
                message: "user is required".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, b"error [invalid_input]: user is required\n");
    }
}
