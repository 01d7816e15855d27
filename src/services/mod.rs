// Service exports
pub mod viacep;
pub mod weatherapi;

pub use viacep::{ViaCepClient, ViaCepError};
pub use weatherapi::{WeatherApiClient, WeatherApiError};
