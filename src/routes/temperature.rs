use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::{LookupError, TemperatureLookup};
use crate::models::{ErrorResponse, TemperatureResponse};
use crate::services::ViaCepError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub lookup: TemperatureLookup,
}

/// Configure the temperature route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/temperature/{cep}", web::get().to(get_temperature));
}

/// Current temperature for a postal code
///
/// GET /temperature/{cep}
///
/// Response body:
/// ```json
/// {"temp_C": 25.000000, "temp_F": 77.000000, "temp_K": 298.000000}
/// ```
async fn get_temperature(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let cep = path.into_inner();

    tracing::info!("Temperature requested for postal code: {}", cep);

    match state.lookup.run(&cep).await {
        Ok(temperatures) => {
            let body = TemperatureResponse::from(temperatures).to_body();
            tracing::info!("Response for {}: {}", cep, body);
            HttpResponse::Ok()
                .content_type("application/json")
                .body(body)
        }
        Err(e) => {
            let response = error_response(&e);
            HttpResponse::build(
                StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::BAD_GATEWAY),
            )
            .json(response)
        }
    }
}

/// Map an upstream failure to the error body returned under the strict policy
pub fn error_response(err: &LookupError) -> ErrorResponse {
    let (status, error) = match err {
        LookupError::Address(ViaCepError::InvalidPostalCode(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode")
        }
        LookupError::Address(ViaCepError::NotFound(_)) => (StatusCode::NOT_FOUND, "can not find zipcode"),
        _ => (StatusCode::BAD_GATEWAY, "upstream service failure"),
    };

    ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    }
}
