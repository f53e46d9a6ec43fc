use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error envelope returned when the upstream call fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Value,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Value) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}

/// Response for the carriers endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarriersResponse {
    pub data: Value,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
