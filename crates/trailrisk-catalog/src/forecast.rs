//! Short-horizon daily forecast for display. Nothing here feeds a score.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::locations::StaticLocationCatalog;

pub const DEFAULT_FORECAST_DAYS: u32 = 5;
pub const MAX_FORECAST_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Thunderstorm,
    Snow,
}

impl SkyCondition {
    pub const ALL: [Self; 6] = [
        Self::Sunny,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Rain,
        Self::Thunderstorm,
        Self::Snow,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::PartlyCloudy => "cloud-sun",
            Self::Cloudy => "cloud",
            Self::Rain => "cloud-rain",
            Self::Thunderstorm => "bolt",
            Self::Snow => "snowflake",
        }
    }

    fn precip_chance<R: Rng + ?Sized>(self, rng: &mut R) -> u8 {
        match self {
            Self::Sunny => 0,
            Self::PartlyCloudy => rng.gen_range(0..20),
            Self::Cloudy => 20 + rng.gen_range(0..30),
            Self::Rain | Self::Snow => 60 + rng.gen_range(0..40),
            Self::Thunderstorm => 70 + rng.gen_range(0..30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub date: NaiveDate,
    pub label: String,
    pub temp_high_f: i32,
    pub temp_low_f: i32,
    pub condition: SkyCondition,
    pub icon: String,
    pub precip_chance: u8,
}

const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_degrees(value: f64) -> i32 {
    value.round() as i32
}

pub struct ForecastGenerator<R> {
    rng: R,
    catalog: StaticLocationCatalog,
}

impl<R: Rng> ForecastGenerator<R> {
    pub fn new(rng: R, catalog: StaticLocationCatalog) -> Self {
        Self { rng, catalog }
    }

    /// One entry per day starting at `start`; `days` is capped at [`MAX_FORECAST_DAYS`].
    pub fn generate(&mut self, location: &str, start: NaiveDate, days: u32) -> Vec<ForecastDay> {
        let base_high = self.catalog.base_high_f(location);
        (0..days.min(MAX_FORECAST_DAYS))
            .map_while(|offset| {
                let date = start.checked_add_days(Days::new(u64::from(offset)))?;
                Some(self.day(base_high, f64::from(offset), date))
            })
            .collect()
    }

    fn day(&mut self, base_high: f64, offset: f64, date: NaiveDate) -> ForecastDay {
        let temp_high_f = whole_degrees(base_high - offset * 2.0 + self.rng.gen_range(-5.0..5.0));
        let temp_low_f =
            whole_degrees(f64::from(temp_high_f) - 15.0 - self.rng.gen_range(0.0..5.0));
        let condition = SkyCondition::ALL
            .get(self.rng.gen_range(0..SkyCondition::ALL.len()))
            .copied()
            .unwrap_or(SkyCondition::Sunny);
        let precip_chance = condition.precip_chance(&mut self.rng);

        ForecastDay {
            day: weekday_name(date.weekday()).to_string(),
            date,
            label: date.format("%b %-d").to_string(),
            temp_high_f,
            temp_low_f,
            condition,
            icon: condition.icon().to_string(),
            precip_chance,
        }
    }
}
