use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rate request as sent by the client app
///
/// Fields are untyped; whatever the caller sends is forwarded. `None` means
/// the key was absent, `Some(Value::Null)` means the caller sent `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateRequest {
    #[serde(rename = "weightValue", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub weight_value: Option<Value>,
    #[serde(rename = "weightUnits", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub weight_units: Option<Value>,
    /// Lowercase spelling older clients send; wins over `weightUnits`
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub weightunits: Option<Value>,
    #[serde(rename = "fromPostalCode", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub from_postal_code: Option<Value>,
    #[serde(rename = "toCountry", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to_country: Option<Value>,
    #[serde(rename = "toState", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to_state: Option<Value>,
    #[serde(rename = "toPostalCode", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to_postal_code: Option<Value>,
    #[serde(rename = "toCity", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to_city: Option<Value>,
}

impl RateRequest {
    /// Parse a request body; an empty body is an empty request
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

/// Any present value, `null` included, becomes `Some`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
