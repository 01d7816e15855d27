use crate::config::Settings;
use crate::core::temperature;
use crate::models::Temperatures;
use crate::services::{ViaCepClient, ViaCepError, WeatherApiClient, WeatherApiError};
use config::ConfigError;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// What to do when one of the upstream services fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the error and carry on with zero-valued data; the request still
    /// succeeds.
    #[default]
    Lenient,
    /// Stop at the first upstream error and report it to the caller.
    Strict,
}

/// Failure of one of the two upstream lookups
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Postal code lookup failed: {0}")]
    Address(#[from] ViaCepError),

    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherApiError),
}

/// Postal code -> city -> current temperature
///
/// The weather query depends on the resolved city, so the two calls always run
/// one after the other.
#[derive(Clone)]
pub struct TemperatureLookup {
    viacep: Arc<ViaCepClient>,
    weather: Arc<WeatherApiClient>,
    policy: FailurePolicy,
}

impl TemperatureLookup {
    pub fn new(
        viacep: Arc<ViaCepClient>,
        weather: Arc<WeatherApiClient>,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            viacep,
            weather,
            policy,
        }
    }

    /// Build both clients from configuration. Fails when a base URL does not
    /// parse.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let viacep = ViaCepClient::new(
            settings.viacep.parsed_base_url()?,
            settings.viacep.token.clone(),
        );
        let weather = WeatherApiClient::new(
            settings.weatherapi.parsed_base_url()?,
            settings.weatherapi.token.clone(),
        );

        Ok(Self::new(
            Arc::new(viacep),
            Arc::new(weather),
            settings.handler.failure_policy,
        ))
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Resolve the temperature for a postal code.
    ///
    /// Under [`FailurePolicy::Lenient`] this never returns `Err`: a failed
    /// address lookup continues with an empty city, and a failed weather lookup
    /// yields 0 °C / 0 °F.
    pub async fn run(&self, cep: &str) -> Result<Temperatures, LookupError> {
        let address = match self.viacep.get_address_info(cep).await {
            Ok(address) => address,
            Err(e) => self.recover(e.into())?,
        };

        tracing::info!("Address info for {}: {:?}", cep, address);

        let city = address.localidade.as_str();

        tracing::info!("City: {}", city);

        let weather = match self.weather.get_weather_info(city).await {
            Ok(weather) => weather,
            Err(e) => self.recover(e.into())?,
        };

        tracing::info!("Weather info for {}: {:?}", city, weather);

        Ok(temperature::from_conditions(&weather.current))
    }

    fn recover<T: Default>(&self, err: LookupError) -> Result<T, LookupError> {
        tracing::error!("{}", err);
        match self.policy {
            FailurePolicy::Lenient => Ok(T::default()),
            FailurePolicy::Strict => Err(err),
        }
    }
}
