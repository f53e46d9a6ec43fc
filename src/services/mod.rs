// Service exports
pub mod credentials;
pub mod shipstation;

pub use credentials::{Credentials, CredentialsError};
pub use shipstation::{ShipStationClient, ShipStationError};
