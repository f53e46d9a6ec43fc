use crate::models::ShipmentRateQuery;
use crate::services::credentials::Credentials;
use reqwest::header::{HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling ShipStation
#[derive(Debug, Error)]
pub enum ShipStationError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request failed with status code {}", .status.as_u16())]
    ApiError { status: StatusCode, body: Option<Value> },

    #[error("Credentials cannot be sent as a header: {0}")]
    InvalidCredentials(#[from] InvalidHeaderValue),
}

impl ShipStationError {
    /// Best description of the failure for the caller: the upstream error
    /// body when there is one, otherwise our own error text.
    ///
    /// Empty-ish bodies (`null`, `false`, `0`, `""`) carry nothing useful and
    /// fall back to the status text.
    pub fn details(&self) -> Value {
        match self {
            Self::ApiError {
                body: Some(body), ..
            } if is_meaningful(body) => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

fn is_meaningful(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// ShipStation API client
///
/// Holds the pre-built `Authorization` header; the secrets themselves are
/// dropped once the header is encoded.
pub struct ShipStationClient {
    base_url: String,
    auth_header: HeaderValue,
    client: Client,
}

impl ShipStationClient {
    /// Create a new ShipStation client
    ///
    /// `timeout` of `None` leaves outbound calls unbounded.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Option<Duration>,
    ) -> Result<Self, ShipStationError> {
        let mut auth_header = HeaderValue::from_str(&credentials.basic_auth_header())?;
        auth_header.set_sensitive(true);

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into(),
            auth_header,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Request rates for a shipment
    ///
    /// Returns the upstream body untouched so the relay can forward it as-is.
    pub async fn get_rates(
        &self,
        query: &ShipmentRateQuery,
    ) -> Result<actix_web::web::Bytes, ShipStationError> {
        let url = self.url("shipments/getrates");

        tracing::debug!(
            "Requesting rates from {} (to {:?} {:?})",
            url,
            query.to_country,
            query.to_postal_code
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .json(query)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.bytes().await?)
    }

    /// List carriers enabled on the account
    pub async fn list_carriers(&self) -> Result<Value, ShipStationError> {
        let url = self.url("carriers");

        tracing::debug!("Listing carriers from {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response.bytes().await?;

        Ok(parse_body(&body).unwrap_or(Value::Null))
    }
}

/// Turn a non-2xx response into [`ShipStationError::ApiError`], keeping its body
async fn check_status(response: Response) -> Result<Response, ShipStationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.ok().and_then(|b| parse_body(&b));
    Err(ShipStationError::ApiError { status, body })
}

/// JSON if it parses, the raw text otherwise, nothing for an empty body
fn parse_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    Some(
        serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned())),
    )
}
