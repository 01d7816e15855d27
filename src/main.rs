use actix_web::{middleware, web, App, HttpServer};
use cep_temperature::config::{LoggingSettings, Settings};
use cep_temperature::routes::{self, AppState};
use cep_temperature::TemperatureLookup;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Fixed listen address
const LISTEN_ADDR: (&str, u16) = ("0.0.0.0", 8080);

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Initialize logging
    match &settings {
        Ok(s) => init_logging(&s.logging),
        Err(_) => init_logging(&LoggingSettings::default()),
    }

    info!("Starting CEP temperature service...");

    let settings = settings.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    info!("Configuration loaded successfully");

    let lookup = TemperatureLookup::from_settings(&settings).unwrap_or_else(|e| {
        error!("Failed to build upstream clients: {}", e);
        std::process::exit(1);
    });

    info!(
        "Clients initialized (ViaCEP: {}, WeatherAPI: {}, failure policy: {:?})",
        settings.viacep.base_url,
        settings.weatherapi.base_url,
        lookup.policy()
    );

    let app_state = AppState { lookup };

    info!("Starting HTTP server on {}:{}", LISTEN_ADDR.0, LISTEN_ADDR.1);

    let server = match HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .bind(LISTEN_ADDR)
    {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to bind {}:{}: {}", LISTEN_ADDR.0, LISTEN_ADDR.1, e);
            return;
        }
    };

    if let Err(e) = server.run().await {
        error!("HTTP server error: {}", e);
    }
}
