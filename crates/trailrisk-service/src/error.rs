use std::io;

use serde_json::error::Category;
use thiserror::Error;
use trailrisk_catalog::WeatherError;
use trailrisk_core::AssessmentError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl ServiceError {
    /// Well-formed JSON with the wrong shape is bad input, not a parse failure.
    pub fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Assessment(AssessmentError::invalid(err.to_string())),
            Category::Io | Category::Syntax | Category::Eof => Self::Parse(err),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Assessment(err) | Self::Weather(WeatherError::Assessment(err)) => err.kind(),
            Self::Weather(WeatherError::InvalidReading(_)) => "invalid_input",
        }
    }
}
