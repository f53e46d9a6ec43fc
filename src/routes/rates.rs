use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use crate::models::{CarriersResponse, ErrorResponse, HealthResponse, RateRequest, ShipmentRateQuery};
use crate::services::ShipStationClient;
use serde_json::Value;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub shipstation: Arc<ShipStationClient>,
}

/// Configure the relay routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/get-rates", web::post().to(get_rates))
        .route("/get-carriers", web::get().to(get_carriers));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Get shipping rates
///
/// POST /get-rates
///
/// Request body:
/// ```json
/// {
///   "weightValue": 2,
///   "weightUnits": "pounds",
///   "fromPostalCode": "78703",
///   "toCountry": "US",
///   "toState": "NY",
///   "toPostalCode": "10001",
///   "toCity": "New York"
/// }
/// ```
///
/// An empty body is treated as `{}`. Responds with ShipStation's rate list
/// unchanged.
async fn get_rates(
    state: web::Data<AppState>,
    body: web::Bytes,
    http_req: HttpRequest,
) -> impl Responder {
    let req = match RateRequest::from_body(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::info!("JSON payload error on {}: {}", http_req.path(), e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                "invalid_json",
                Value::String(format!("Invalid JSON: {}", e)),
            ));
        }
    };
    let query = ShipmentRateQuery::from(req);

    match state.shipstation.get_rates(&query).await {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(e) => {
            tracing::error!("Error fetching shipping rates: {}", e.details());
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to get shipping rates",
                e.details(),
            ))
        }
    }
}

/// List carriers
///
/// GET /get-carriers
async fn get_carriers(state: web::Data<AppState>) -> impl Responder {
    match state.shipstation.list_carriers().await {
        Ok(data) => {
            tracing::debug!("Available carriers: {}", data);
            HttpResponse::Ok().json(CarriersResponse { data })
        }
        Err(e) => {
            tracing::error!("Error fetching carriers: {}", e.details());
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to get carriers",
                e.details(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::services::Credentials;

    #[actix_web::test]
    async fn test_health_check() {
        let client = ShipStationClient::new(
            "http://127.0.0.1:9",
            Credentials::new("k", "s").unwrap(),
            None,
        )
        .unwrap();
        let state = AppState { shipstation: Arc::new(client) };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }
}
