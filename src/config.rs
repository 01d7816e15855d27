use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;
use crate::core::FailurePolicy;

pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_WEATHERAPI_BASE_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Flat environment variables (also read from `.env`) and the keys they set
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("VIACEP_API_BASE_URL", "viacep.base_url"),
    ("VIACEP_API_TOKEN", "viacep.token"),
    ("WEATHER_API_BASE_URL", "weatherapi.base_url"),
    ("WEATHER_API_TOKEN", "weatherapi.token"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub viacep: ServiceSettings,
    pub weatherapi: ServiceSettings,
    #[serde(default)]
    pub handler: HandlerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Base URL and credential of an upstream service
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub base_url: String,
    #[serde(default)]
    pub token: String,
}

impl ServiceSettings {
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Message(format!("invalid base URL {:?}: {}", self.base_url, e)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandlerSettings {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults (public ViaCEP and WeatherAPI endpoints)
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CEPTEMP__)
    /// 5. VIACEP_API_BASE_URL, VIACEP_API_TOKEN, WEATHER_API_BASE_URL,
    ///    WEATHER_API_TOKEN, LOG_LEVEL and LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(prefixed_env())
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings = apply_env_overrides(settings, |name| std::env::var(name).ok())?;
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the clients could not be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viacep.parsed_base_url()?;
        self.weatherapi.parsed_base_url()?;
        Ok(())
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("viacep.base_url", DEFAULT_VIACEP_BASE_URL)?
        .set_default("weatherapi.base_url", DEFAULT_WEATHERAPI_BASE_URL)
}

// e.g., CEPTEMP__WEATHERAPI__TOKEN -> weatherapi.token
fn prefixed_env() -> Environment {
    Environment::with_prefix("CEPTEMP")
        .prefix_separator("__")
        .separator("__")
}

/// Apply the flat variables listed in `ENV_OVERRIDES` on top of `settings`
fn apply_env_overrides<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for &(var, key) in ENV_OVERRIDES {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    #[test]
    fn test_defaults_when_empty() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.viacep.base_url, DEFAULT_VIACEP_BASE_URL);
        assert_eq!(settings.weatherapi.base_url, DEFAULT_WEATHERAPI_BASE_URL);
        assert_eq!(settings.weatherapi.token, "");
        assert_eq!(settings.handler.failure_policy, FailurePolicy::Lenient);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_file_values() {
        let settings = from_toml(
            r#"
            [weatherapi]
            base_url = "http://localhost:9000/v1/current.json"
            token = "abc"

            [handler]
            failure_policy = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(settings.weatherapi.token, "abc");
        assert_eq!(settings.handler.failure_policy, FailurePolicy::Strict);
        assert_eq!(settings.viacep.base_url, DEFAULT_VIACEP_BASE_URL);
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        let err = from_toml(
            r#"
            [viacep]
            base_url = "not a url"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("invalid base URL"));
    }

    #[test]
    fn test_env_overrides() {
        let base = with_defaults().unwrap().build().unwrap();
        let overridden = apply_env_overrides(base, |name| match name {
            "WEATHER_API_TOKEN" => Some("from-env".to_string()),
            "VIACEP_API_BASE_URL" => Some("http://cep.local/ws".to_string()),
            _ => None,
        })
        .unwrap();

        let settings: Settings = overridden.try_deserialize().unwrap();
        assert_eq!(settings.weatherapi.token, "from-env");
        assert_eq!(settings.viacep.base_url, "http://cep.local/ws");
        assert_eq!(settings.weatherapi.base_url, DEFAULT_WEATHERAPI_BASE_URL);
    }
}
