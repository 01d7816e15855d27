// Route exports
pub mod temperature;

use actix_web::web;

pub use temperature::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(temperature::configure);
}
