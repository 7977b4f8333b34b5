use chrono::NaiveDate;
use trailrisk_catalog::{DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS};

use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub seed: Option<u64>,
    pub output: OutputFormat,
    pub forecast_days: u32,
    pub forecast_start: Option<NaiveDate>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            seed: None,
            output: OutputFormat::Json,
            forecast_days: DEFAULT_FORECAST_DAYS,
            forecast_start: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = read("TRAILRISK_SEED")
            .map(|v| {
                v.parse::<u64>().map_err(|_| {
                    ServiceError::Config(format!("TRAILRISK_SEED must be an unsigned integer, got {v:?}"))
                })
            })
            .transpose()?;

        let output = match read("TRAILRISK_OUTPUT").map(|v| v.to_ascii_lowercase()) {
            None => OutputFormat::Json,
            Some(v) if v == "json" => OutputFormat::Json,
            Some(v) if v == "text" => OutputFormat::Text,
            Some(v) => {
                return Err(ServiceError::Config(format!(
                    "TRAILRISK_OUTPUT must be json or text, got {v:?}"
                )))
            }
        };

        let forecast_days = read("TRAILRISK_FORECAST_DAYS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_FORECAST_DAYS)
            .clamp(1, MAX_FORECAST_DAYS);

        let forecast_start = read("TRAILRISK_FORECAST_START")
            .map(|v| {
                NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| {
                    ServiceError::Config(format!(
                        "TRAILRISK_FORECAST_START must be YYYY-MM-DD, got {v:?}"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            seed,
            output,
            forecast_days,
            forecast_start,
        })
    }
}
