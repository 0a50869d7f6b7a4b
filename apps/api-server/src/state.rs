//! Application state - shared across all handlers.

use std::sync::Arc;

use blogsmith_core::ports::{ContentGenerator, PostRepository, StorageMode};
use blogsmith_infra::database::DemoPostRepository;
use blogsmith_infra::{GeminiConfig, MongoConfig};
use blogsmith_shared::dto::{AiServiceStatus, DatabaseStatus};

#[cfg(feature = "gemini")]
use blogsmith_infra::GeminiClient;
#[cfg(feature = "mongodb")]
use blogsmith_infra::MongoPostRepository;

use crate::config::AppConfig;

/// Shared application state.
///
/// Built once at startup. Which repository and whether a generator is present
/// never change afterwards.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub generator: Option<Arc<dyn ContentGenerator>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let posts = init_storage(config.mongo.as_ref()).await;
        let generator = init_generator(config.gemini.as_ref());

        let state = Self::from_parts(posts, generator);
        tracing::info!(
            database = ?state.database_status(),
            ai_service = ?state.ai_status(),
            "Application state initialized"
        );
        state
    }

    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        generator: Option<Arc<dyn ContentGenerator>>,
    ) -> Self {
        Self { posts, generator }
    }

    pub fn database_status(&self) -> DatabaseStatus {
        match self.posts.mode() {
            StorageMode::Connected => DatabaseStatus::Connected,
            StorageMode::Demo => DatabaseStatus::DemoMode,
        }
    }

    pub fn ai_status(&self) -> AiServiceStatus {
        if self.generator.is_some() {
            AiServiceStatus::Configured
        } else {
            AiServiceStatus::NotConfigured
        }
    }
}

#[cfg(feature = "mongodb")]
async fn init_storage(config: Option<&MongoConfig>) -> Arc<dyn PostRepository> {
    let Some(config) = config else {
        tracing::warn!("MONGODB_URI not configured. Running in demo mode.");
        return Arc::new(DemoPostRepository);
    };

    match MongoPostRepository::connect(config).await {
        Ok(repo) => Arc::new(repo),
        Err(e) => {
            tracing::error!("MongoDB connection failed: {}. Running in demo mode.", e);
            Arc::new(DemoPostRepository)
        }
    }
}

#[cfg(not(feature = "mongodb"))]
async fn init_storage(_config: Option<&MongoConfig>) -> Arc<dyn PostRepository> {
    tracing::info!("Running without mongodb feature - using demo repository");
    Arc::new(DemoPostRepository)
}

#[cfg(feature = "gemini")]
fn init_generator(config: Option<&GeminiConfig>) -> Option<Arc<dyn ContentGenerator>> {
    let Some(config) = config else {
        tracing::warn!("GEMINI_API_KEY not configured. AI content generation disabled.");
        return None;
    };

    match GeminiClient::new(config.clone()) {
        Ok(client) => {
            tracing::info!(model = %client.model(), "Gemini API configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::error!("Gemini API configuration failed: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "gemini"))]
fn init_generator(_config: Option<&GeminiConfig>) -> Option<Arc<dyn ContentGenerator>> {
    tracing::info!("Running without gemini feature - AI content generation disabled");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogsmith_infra::InMemoryPostRepository;

    fn unconfigured() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            mongo: None,
            gemini: None,
            cors_origins: vec![],
        }
    }

    #[actix_web::test]
    async fn test_unconfigured_state_is_degraded() {
        let state = AppState::new(&unconfigured()).await;
        assert_eq!(state.database_status(), DatabaseStatus::DemoMode);
        assert_eq!(state.ai_status(), AiServiceStatus::NotConfigured);
    }

    #[cfg(feature = "mongodb")]
    #[actix_web::test]
    async fn test_bad_uri_falls_back_to_demo_mode() {
        let mut config = unconfigured();
        config.mongo = Some(MongoConfig::new("not-a-mongodb-uri"));

        let state = AppState::new(&config).await;
        assert_eq!(state.database_status(), DatabaseStatus::DemoMode);
    }

    #[cfg(feature = "gemini")]
    #[actix_web::test]
    async fn test_api_key_configures_generator() {
        let mut config = unconfigured();
        config.gemini = Some(GeminiConfig::new("AIzaSyExample123"));

        let state = AppState::new(&config).await;
        assert_eq!(state.ai_status(), AiServiceStatus::Configured);
    }

    #[test]
    fn test_persistent_repository_reports_connected() {
        let state = AppState::from_parts(Arc::new(InMemoryPostRepository::new()), None);
        assert_eq!(state.database_status(), DatabaseStatus::Connected);
    }
}
