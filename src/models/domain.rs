use serde::Serialize;
use serde_json::Value;

use crate::models::requests::RateRequest;

/// Carrier every rate lookup is pinned to
pub const CARRIER_CODE: &str = "fedex_walleted";

/// Delivery confirmation requested on every quote
pub const CONFIRMATION: &str = "delivery";

/// Body of `POST /shipments/getrates` on ShipStation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRateQuery {
    pub carrier_code: &'static str,
    pub service_code: Option<String>,
    pub package_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_postal_code: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_state: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_country: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_postal_code: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_city: Option<Value>,
    pub weight: Weight,
    pub confirmation: &'static str,
    pub residential: bool,
}

/// Package weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Value>,
}

impl From<RateRequest> for ShipmentRateQuery {
    fn from(req: RateRequest) -> Self {
        Self {
            carrier_code: CARRIER_CODE,
            service_code: None,
            package_code: None,
            from_postal_code: req.from_postal_code,
            to_state: req.to_state,
            to_country: req.to_country,
            to_postal_code: req.to_postal_code,
            to_city: req.to_city,
            weight: Weight {
                value: req.weight_value,
                units: req.weightunits.or(req.weight_units),
            },
            confirmation: CONFIRMATION,
            residential: false,
        }
    }
}
