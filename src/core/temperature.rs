use crate::models::{CurrentConditions, Temperatures};

/// Offset added to Celsius to obtain Kelvin. Integral on purpose: reported
/// values are `C + 273`, not `C + 273.15`.
pub const KELVIN_OFFSET: f64 = 273.0;

#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Build the three reported units from the weather service's current conditions
pub fn from_conditions(current: &CurrentConditions) -> Temperatures {
    Temperatures {
        celsius: current.temp_c,
        fahrenheit: current.temp_f,
        kelvin: celsius_to_kelvin(current.temp_c),
    }
}
