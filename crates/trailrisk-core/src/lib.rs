pub mod aggregate;
pub mod catalog;
pub mod describe;
pub mod engine;
pub mod error;
pub mod factors;
pub mod profile;
pub mod recommend;
pub mod types;

pub use aggregate::*;
pub use catalog::*;
pub use describe::*;
pub use engine::*;
pub use error::AssessmentError;
pub use factors::*;
pub use profile::*;
pub use recommend::*;
pub use types::*;
