//! Status and health check endpoints.

use actix_web::{HttpResponse, web};
use blogsmith_shared::dto::{DatabaseStatus, HealthResponse, StatusResponse};

use crate::state::AppState;

/// Service banner with the startup flags.
///
/// GET /
pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        message: "AI Blog Platform API is running!".to_string(),
        status: "healthy".to_string(),
        database: state.database_status(),
        ai_service: state.ai_status(),
    })
}

/// Health check endpoint - always 200, with a live database check.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = state.database_status();

    let mut response = HealthResponse {
        status: "healthy".to_string(),
        database,
        database_healthy: false,
        ai_service: state.ai_status(),
        backend: "running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        error: None,
    };

    if database == DatabaseStatus::Connected {
        // A panicking driver must not take the health endpoint down with it.
        let posts = state.posts.clone();
        match tokio::spawn(async move { posts.ping().await }).await {
            Ok(Ok(())) => response.database_healthy = true,
            Ok(Err(e)) => tracing::warn!("Database health check failed: {}", e),
            Err(e) => {
                tracing::error!("Health check error: {}", e);
                response.status = "error".to_string();
                response.backend = "running_with_errors".to_string();
                response.error = Some(e.to_string());
            }
        }
    }

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use blogsmith_infra::{DemoPostRepository, InMemoryPostRepository};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::handlers::test_support::{FailingRepository, StubGenerator};

    async fn get_json(state: AppState, uri: &str) -> (u16, Value) {
        let app = test_app!(state).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_root_reports_flags() {
        let state = AppState::from_parts(
            Arc::new(DemoPostRepository),
            Some(Arc::new(StubGenerator(Some("ok".to_string())))),
        );

        let (status, body) = get_json(state, "/").await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "AI Blog Platform API is running!");
        assert_eq!(body["database"], "demo_mode");
        assert_eq!(body["ai_service"], "configured");
    }

    #[actix_web::test]
    async fn test_health_in_degraded_mode() {
        let state = AppState::from_parts(Arc::new(DemoPostRepository), None);

        let (status, body) = get_json(state, "/api/health").await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "demo_mode");
        assert_eq!(body["database_healthy"], false);
        assert_eq!(body["ai_service"], "not_configured");
        assert_eq!(body["backend"], "running");
        assert!(body["timestamp"].as_str().is_some());
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_health_pings_connected_storage() {
        let state = AppState::from_parts(Arc::new(InMemoryPostRepository::new()), None);

        let (_, body) = get_json(state, "/api/health").await;
        assert_eq!(body["database"], "connected");
        assert_eq!(body["database_healthy"], true);
    }

    #[actix_web::test]
    async fn test_failed_ping_keeps_startup_flag() {
        let state = AppState::from_parts(
            Arc::new(FailingRepository {
                panic_on_ping: false,
            }),
            None,
        );

        let (status, body) = get_json(state, "/api/health").await;
        assert_eq!(status, 200);
        assert_eq!(body["database"], "connected");
        assert_eq!(body["database_healthy"], false);
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_ping_panic_reports_error_status() {
        let state = AppState::from_parts(Arc::new(FailingRepository { panic_on_ping: true }), None);

        let (status, body) = get_json(state, "/api/health").await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], "error");
        assert_eq!(body["backend"], "running_with_errors");
        assert!(body["error"].as_str().is_some());
    }
}
