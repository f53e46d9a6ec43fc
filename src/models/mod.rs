// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ShipmentRateQuery, Weight, CARRIER_CODE, CONFIRMATION};
pub use requests::RateRequest;
pub use responses::{CarriersResponse, ErrorResponse, HealthResponse};
