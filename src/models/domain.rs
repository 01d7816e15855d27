use serde::{Deserialize, Serialize};

/// Address resolved from a postal code (ViaCEP document)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInfo {
    pub cep: String,
    /// Street
    pub logradouro: String,
    pub complemento: String,
    /// Neighbourhood
    pub bairro: String,
    /// City, the only field used to query the weather service
    pub localidade: String,
    /// State abbreviation
    pub uf: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

/// Weather lookup result (WeatherAPI `current.json` document)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    #[serde(default)]
    pub location: WeatherLocation,
    pub current: CurrentConditions,
}

/// Location echoed back by the weather service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Snapshot of the present conditions for the queried location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub text: String,
}

/// Current temperature in the three reported units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Temperatures {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}
