use serde::{Deserialize, Serialize};
use crate::models::domain::Temperatures;

/// Response for the temperature endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResponse {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl From<Temperatures> for TemperatureResponse {
    fn from(t: Temperatures) -> Self {
        Self {
            temp_c: t.celsius,
            temp_f: t.fahrenheit,
            temp_k: t.kelvin,
        }
    }
}

impl TemperatureResponse {
    /// Render the body with six fixed decimals per field, e.g.
    /// `{"temp_C": 25.000000, "temp_F": 77.000000, "temp_K": 298.000000}`
    pub fn to_body(&self) -> String {
        format!(
            "{{\"temp_C\": {:.6}, \"temp_F\": {:.6}, \"temp_K\": {:.6}}}",
            self.temp_c, self.temp_f, self.temp_k
        )
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
