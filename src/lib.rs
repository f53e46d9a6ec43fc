//! Shiprate Relay - credential-injecting proxy for ShipStation
//!
//! Forwards rate and carrier lookups from a client app to ShipStation,
//! attaching the server-held API key and secret as Basic auth.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::{Settings, SettingsError};
pub use models::{RateRequest, ShipmentRateQuery};
pub use routes::AppState;
pub use services::{Credentials, ShipStationClient, ShipStationError};
