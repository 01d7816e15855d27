//! CEP Temperature - current temperature lookup by Brazilian postal code
//!
//! Resolves a postal code (CEP) to a city through ViaCEP, queries WeatherAPI
//! for that city and reports the temperature in Celsius, Fahrenheit and Kelvin.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{celsius_to_kelvin, FailurePolicy, LookupError, TemperatureLookup};
pub use crate::models::{AddressInfo, WeatherInfo, Temperatures, TemperatureResponse};
pub use crate::routes::AppState;
