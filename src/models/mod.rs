// Model exports
pub mod domain;
pub mod responses;

pub use domain::{AddressInfo, WeatherInfo, WeatherLocation, CurrentConditions, Condition, Temperatures};
pub use responses::{TemperatureResponse, ErrorResponse};
