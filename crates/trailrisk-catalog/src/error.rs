use thiserror::Error;
use trailrisk_core::AssessmentError;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid weather reading: {0}")]
    InvalidReading(String),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}
