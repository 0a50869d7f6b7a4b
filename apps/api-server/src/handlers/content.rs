//! AI content generation.

use actix_web::{HttpResponse, web};

use blogsmith_core::error::GenerationError;
use blogsmith_shared::dto::{GenerateContentRequest, GenerateContentResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Draft a blog post about the given topic.
///
/// POST /api/generate-content
pub async fn generate_content(
    state: web::Data<AppState>,
    body: web::Json<GenerateContentRequest>,
) -> AppResult<HttpResponse> {
    let generator = state
        .generator
        .as_ref()
        .ok_or(GenerationError::NotConfigured)?;

    let topic = body.into_inner().prompt;
    if topic.is_empty() {
        return Err(AppError::Validation(vec!["prompt is required".to_string()]));
    }

    tracing::info!(topic = %topic, "Generating content");
    let content = generator.generate_text(&topic).await.map_err(|e| {
        tracing::warn!("Content generation failed: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(GenerateContentResponse { content }))
}
