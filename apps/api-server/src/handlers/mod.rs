//! HTTP handlers and route configuration.

/// Build an initialized test service around an `AppState`.
#[cfg(test)]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .app_data(crate::handlers::json_config())
                .configure(crate::handlers::configure_routes),
        )
    };
}

mod content;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route(
                "/generate-content",
                web::post().to(content::generate_content),
            )
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .route("/posts/{id}", web::get().to(posts::get_post)),
    );
}

/// JSON extractor settings: malformed bodies and missing fields become
/// validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        AppError::Validation(vec![err.to_string()]).into()
    })
}
