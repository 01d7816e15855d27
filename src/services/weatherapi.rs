use crate::models::WeatherInfo;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when querying WeatherAPI
#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Error document returned by WeatherAPI on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: i64,
    message: String,
}

/// WeatherAPI client for current conditions
pub struct WeatherApiClient {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl WeatherApiClient {
    /// Create a new WeatherAPI client. `base_url` points at the
    /// `current.json` endpoint.
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: Client::new(),
        }
    }

    /// Fetch the current weather for a city
    pub async fn get_weather_info(&self, city: &str) -> Result<WeatherInfo, WeatherApiError> {
        tracing::debug!("Fetching weather for city: {}", city);

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => format!("{} (code {})", parsed.error.message, parsed.error.code),
                Err(_) => truncate_body(&body),
            };
            return Err(WeatherApiError::ApiError(format!(
                "Failed to fetch weather: {}: {}",
                status, detail
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherApiError::InvalidResponse(format!("Failed to parse weather: {}", e)))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(url: &str, key: &str) -> WeatherApiClient {
        WeatherApiClient::new(Url::parse(url).unwrap(), key.to_string())
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");

        let long = "é".repeat(250);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[tokio::test]
    async fn test_get_weather_info_sends_key_and_city() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/current.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "token".into()),
                Matcher::UrlEncoded("q".into(), "São Paulo".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"location":{"name":"Sao Paulo","region":"Sao Paulo","country":"Brazil"},"current":{"temp_c":25.0,"temp_f":77.0,"humidity":60,"condition":{"text":"Sunny"}}}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/v1/current.json", server.url()), "token");
        let weather = client.get_weather_info("São Paulo").await.unwrap();

        assert_eq!(weather.current.temp_c, 25.0);
        assert_eq!(weather.current.temp_f, 77.0);
        assert_eq!(weather.location.country, "Brazil");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_weather_info_reports_upstream_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/current.json")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":{"code":1006,"message":"No matching location found."}}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/v1/current.json", server.url()), "token");
        let err = client.get_weather_info("Nowhere").await.unwrap_err();

        match err {
            WeatherApiError::ApiError(msg) => {
                assert!(msg.contains("No matching location found."));
                assert!(msg.contains("1006"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_get_weather_info_missing_current() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/current.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"location":{"name":"Sao Paulo"}}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/v1/current.json", server.url()), "token");
        let err = client.get_weather_info("São Paulo").await.unwrap_err();
        assert!(matches!(err, WeatherApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_get_weather_info_connection_refused() {
        let client = client_for("http://127.0.0.1:1/v1/current.json", "token");
        let err = client.get_weather_info("São Paulo").await.unwrap_err();
        assert!(matches!(err, WeatherApiError::RequestError(_)));
    }
}
