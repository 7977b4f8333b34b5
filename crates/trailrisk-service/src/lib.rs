pub mod config;
pub mod error;
pub mod protocol;
pub mod render;
mod server;

pub use config::{OutputFormat, ServiceConfig};
pub use error::ServiceError;
pub use server::AssessmentService;
