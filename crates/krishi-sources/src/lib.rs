#![forbid(unsafe_code)]

pub mod fixtures;
pub mod ports;
pub mod soil;
pub mod weather;

pub use ports::{SoilSource, WeatherSource};
pub use soil::SyntheticSoil;
pub use weather::OpenMeteoWeather;

pub const CRATE_NAME: &str = "krishi-sources";
