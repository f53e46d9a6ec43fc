// Route exports
pub mod rates;

use actix_web::web;

pub use rates::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(rates::configure);
}
