use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use shiprate_relay::config::LoggingSettings;
use shiprate_relay::{routes, AppState, Settings, ShipStationClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Settings load before logging so [logging] and LOG_* both apply
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting Shiprate relay...");

    let settings = settings.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Credentials are required before anything listens
    let credentials = settings.shipstation.credentials().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    info!("Configuration loaded successfully");

    let shipstation = ShipStationClient::new(
        settings.shipstation.base_url.clone(),
        credentials,
        settings.shipstation.timeout(),
    )
    .unwrap_or_else(|e| {
        error!("Failed to create ShipStation client: {}", e);
        std::process::exit(1);
    });

    info!(
        "ShipStation client initialized ({}, timeout: {:?})",
        shipstation.base_url(),
        settings.shipstation.timeout()
    );

    let app_state = AppState {
        shipstation: Arc::new(shipstation),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Server running on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}

/// `RUST_LOG` wins over the configured level when set
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format.eq_ignore_ascii_case("pretty") {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}
