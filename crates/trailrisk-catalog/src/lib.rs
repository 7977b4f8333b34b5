pub mod body;
pub mod error;
pub mod forecast;
pub mod gis;
pub mod locations;
pub mod units;
pub mod weather;

pub use body::*;
pub use error::WeatherError;
pub use forecast::*;
pub use gis::*;
pub use locations::*;
pub use weather::*;
