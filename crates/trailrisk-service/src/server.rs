use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{debug, warn};
use trailrisk_catalog::{
    build_weather_source, ForecastDay, ForecastGenerator, StaticLocationCatalog,
};
use trailrisk_core::{terrain_description, weather_description, AssessmentRequest, RiskEngine};

use crate::config::{OutputFormat, ServiceConfig};
use crate::error::ServiceError;
use crate::protocol::{AssessmentEnvelope, AssessmentResult, ResponseEnvelope};
use crate::render::{write_error, write_report};

pub struct AssessmentService {
    catalog: StaticLocationCatalog,
    config: ServiceConfig,
    rng: StdRng,
}

impl AssessmentService {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_catalog(config, StaticLocationCatalog::pikes_peak_region())
    }

    pub fn with_catalog(config: ServiceConfig, catalog: StaticLocationCatalog) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            catalog,
            config,
            rng,
        }
    }

    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn handle_envelope(
        &mut self,
        envelope: AssessmentEnvelope,
    ) -> Result<AssessmentResult, ServiceError> {
        let mut raw = envelope.request;
        raw.location = self.catalog.resolve(&raw.location);
        if let Some(user) = envelope.user {
            raw.user = Some(user.into_metric());
        }

        if let Some(input) = envelope.weather {
            let child = StdRng::seed_from_u64(self.rng.gen());
            let mut source = build_weather_source(input, self.catalog, child)?;
            raw.weather = source.current(&raw.location)?;
            debug!(source = source.name(), "weather resolved");
        }

        let request = AssessmentRequest::try_from(raw)?;
        let report = RiskEngine::new(&self.catalog).assess(&request, &mut self.rng)?;

        let forecast = envelope.forecast.then(|| {
            let start = self
                .config
                .forecast_start
                .unwrap_or_else(|| Local::now().date_naive());
            self.forecast(&request.location.name, start)
        });

        Ok(AssessmentResult {
            terrain_description: terrain_description(report.factor_scores.terrain).to_string(),
            weather_description: weather_description(report.factor_scores.weather).to_string(),
            weather: request.weather,
            gis: self.catalog.gis_context(&request.location.name),
            forecast,
            report,
        })
    }

    fn forecast(&mut self, location: &str, start: NaiveDate) -> Vec<ForecastDay> {
        let child = StdRng::seed_from_u64(self.rng.gen());
        ForecastGenerator::new(child, self.catalog).generate(
            location,
            start,
            self.config.forecast_days,
        )
    }

    /// Parses and answers one wire line; never fails, errors become error envelopes.
    pub fn handle_line(&mut self, line: &str) -> ResponseEnvelope {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "rejected malformed request");
                let err = ServiceError::from(err);
                return ResponseEnvelope::error(Value::Null, err.kind(), err.to_string());
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let outcome = serde_json::from_value::<AssessmentEnvelope>(value)
            .map_err(ServiceError::from_decode)
            .and_then(|envelope| self.handle_envelope(envelope));
        match outcome {
            Ok(result) => ResponseEnvelope::success(id, result),
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "assessment failed");
                ResponseEnvelope::error(id, err.kind(), err.to_string())
            }
        }
    }

    pub fn serve<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let response = self.handle_line(trimmed);
            self.write_response(&mut writer, &response)?;
        }
        Ok(())
    }

    pub fn serve_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    fn write_response<W: Write>(
        &self,
        writer: &mut W,
        response: &ResponseEnvelope,
    ) -> io::Result<()> {
        match self.config.output {
            OutputFormat::Json => {
                let serialized = serde_json::to_string(response)?;
                writeln!(writer, "{serialized}")?;
            }
            OutputFormat::Text => {
                if let Some(result) = &response.result {
                    write_report(writer, result)?;
                    writeln!(writer)?;
                }
                if let Some(error) = &response.error {
                    write_error(writer, error)?;
                }
            }
        }
        writer.flush()
    }
}
