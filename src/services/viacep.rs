use crate::models::AddressInfo;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when resolving a postal code
#[derive(Debug, Error)]
pub enum ViaCepError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid postal code: {0}")]
    InvalidPostalCode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// ViaCEP API client
///
/// Resolves a postal code into an address. Immutable after construction, so a
/// single instance is shared by every request.
pub struct ViaCepClient {
    base_url: Url,
    token: String,
    client: Client,
}

impl ViaCepClient {
    /// Create a new ViaCEP client. An empty token disables authentication.
    pub fn new(base_url: Url, token: String) -> Self {
        Self {
            base_url,
            token,
            client: Client::new(),
        }
    }

    fn address_url(&self, cep: &str) -> String {
        format!(
            "{}/{}/json/",
            self.base_url.as_str().trim_end_matches('/'),
            urlencoding::encode(cep)
        )
    }

    /// Fetch the address registered for a postal code
    pub async fn get_address_info(&self, cep: &str) -> Result<AddressInfo, ViaCepError> {
        let url = self.address_url(cep);

        tracing::debug!("Fetching address from: {}", url);

        let mut request = self.client.get(&url);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            return Err(ViaCepError::InvalidPostalCode(cep.to_string()));
        }

        if !status.is_success() {
            return Err(ViaCepError::ApiError(format!(
                "Failed to fetch address: {}",
                status
            )));
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| ViaCepError::InvalidResponse(format!("Failed to parse address: {}", e)))?;

        if reports_not_found(&json) {
            return Err(ViaCepError::NotFound(format!("Postal code {} not found", cep)));
        }

        serde_json::from_value(json)
            .map_err(|e| ViaCepError::InvalidResponse(format!("Failed to parse address: {}", e)))
    }
}

/// ViaCEP answers unknown codes with 200 and `{"erro": true}`; newer
/// deployments send the flag as the string `"true"`.
fn reports_not_found(json: &Value) -> bool {
    match json.get("erro") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
