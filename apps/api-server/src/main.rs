//! # Blogsmith API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

/// The application with its middleware stack. The last `wrap` is the
/// outermost layer, so request IDs reach responses produced by CORS too.
macro_rules! blogsmith_app {
    ($state:expr, $cors_origins:expr) => {
        App::new()
            .wrap(middleware::cors::cors($cors_origins))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new($state))
            .app_data(handlers::json_config())
            .configure(handlers::configure_routes)
    };
}

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blogsmith API Server on {}:{}",
        config.host,
        config.port
    );

    // Storage and AI failures here only degrade the service
    let state = AppState::new(&config).await;

    tracing::info!(
        "Health check: http://{}:{}/api/health",
        config.host,
        config.port
    );

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || blogsmith_app!(state.clone(), &cors_origins))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
