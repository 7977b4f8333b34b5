use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trailrisk_service::{AssessmentService, ServiceConfig};

fn init_tracing() {
    let filter = std::env::var("TRAILRISK_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    info!(seeded = config.seed.is_some(), output = ?config.output, "trailriskd ready");

    let mut service = AssessmentService::new(config);
    match service.serve_stdio() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "stdio loop failed");
            ExitCode::FAILURE
        }
    }
}
