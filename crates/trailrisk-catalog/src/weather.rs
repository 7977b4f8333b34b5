use rand::Rng;
use serde::{Deserialize, Serialize};
use trailrisk_core::{LocationRef, WeatherConditions};

use crate::error::WeatherError;
use crate::locations::StaticLocationCatalog;
use crate::units::{fahrenheit_to_celsius, inches_to_mm};

pub trait WeatherSource {
    fn name(&self) -> &'static str;

    fn current(&mut self, location: &LocationRef) -> Result<WeatherConditions, WeatherError>;
}

/// Readings as a US form collects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperialReading {
    pub temperature_f: f64,
    #[serde(default)]
    pub precipitation_in: f64,
    #[serde(default)]
    pub wind_speed_mph: f64,
    #[serde(default)]
    pub thunderstorm_risk: f64,
}

impl ImperialReading {
    pub fn to_metric(&self) -> WeatherConditions {
        WeatherConditions {
            temperature_c: fahrenheit_to_celsius(self.temperature_f),
            precipitation_mm: inches_to_mm(self.precipitation_in),
            wind_speed: self.wind_speed_mph,
            thunderstorm_risk: self.thunderstorm_risk,
        }
    }
}

/// User-entered conditions, returned unchanged for every location.
#[derive(Debug, Clone, Copy)]
pub struct ManualWeather {
    conditions: WeatherConditions,
}

impl ManualWeather {
    pub fn metric(conditions: WeatherConditions) -> Result<Self, WeatherError> {
        conditions.validate()?;
        Ok(Self { conditions })
    }

    pub fn imperial(reading: ImperialReading) -> Result<Self, WeatherError> {
        if !reading.temperature_f.is_finite() {
            return Err(WeatherError::InvalidReading(
                "temperature must be a finite number".to_string(),
            ));
        }
        Self::metric(reading.to_metric())
    }
}

impl WeatherSource for ManualWeather {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn current(&mut self, _location: &LocationRef) -> Result<WeatherConditions, WeatherError> {
        Ok(self.conditions)
    }
}

/// Plausible random conditions, colder at sites with a lower typical high.
pub struct SimulatedWeather<R> {
    rng: R,
    catalog: StaticLocationCatalog,
}

impl<R: Rng> SimulatedWeather<R> {
    pub fn new(rng: R, catalog: StaticLocationCatalog) -> Self {
        Self { rng, catalog }
    }
}

impl<R: Rng> WeatherSource for SimulatedWeather<R> {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn current(&mut self, location: &LocationRef) -> Result<WeatherConditions, WeatherError> {
        let high_f = self.catalog.base_high_f(&location.name);
        let temperature_f = high_f - self.rng.gen_range(0.0..15.0);
        let precipitation_in = if self.rng.gen_bool(0.3) {
            self.rng.gen_range(0.0..0.4)
        } else {
            0.0
        };
        let reading = ImperialReading {
            temperature_f,
            precipitation_in,
            wind_speed_mph: self.rng.gen_range(0.0..25.0),
            thunderstorm_risk: self.rng.gen_range(0.0..0.5),
        };
        tracing::debug!(location = %location.name, ?reading, "simulated weather");
        Ok(reading.to_metric())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum WeatherInput {
    Metric(WeatherConditions),
    Imperial(ImperialReading),
    Simulated,
}

pub fn build_weather_source<R: Rng + 'static>(
    input: WeatherInput,
    catalog: StaticLocationCatalog,
    rng: R,
) -> Result<Box<dyn WeatherSource>, WeatherError> {
    match input {
        WeatherInput::Metric(conditions) => Ok(Box::new(ManualWeather::metric(conditions)?)),
        WeatherInput::Imperial(reading) => Ok(Box::new(ManualWeather::imperial(reading)?)),
        WeatherInput::Simulated => Ok(Box::new(SimulatedWeather::new(rng, catalog))),
    }
}
