// Core exports
pub mod lookup;
pub mod temperature;

pub use lookup::{FailurePolicy, LookupError, TemperatureLookup};
pub use temperature::{celsius_to_kelvin, KELVIN_OFFSET};
