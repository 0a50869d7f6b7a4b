use async_trait::async_trait;
use reqwest::Client;

use blogsmith_core::error::GenerationError;
use blogsmith_core::ports::ContentGenerator;
use blogsmith_core::prompts;

use super::config::GeminiConfig;
use super::types::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

/// Gemini REST client drafting blog posts through `generateContent`.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Provider(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Returns the configured model ID.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn build_request(&self, topic: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompts::blog_post(topic)),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
            },
        }
    }

    /// All text parts of the first candidate, joined.
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let content = response.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Prefer the provider's own error message over the raw body.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_text(&self, topic: &str) -> Result<String, GenerationError> {
        tracing::debug!(model = %self.config.model, "Sending generateContent request to Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.build_request(topic))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                GenerationError::Provider(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        if !status.is_success() {
            tracing::error!("Gemini API error (status {}): {}", status, body);
            return Err(GenerationError::Provider(format!(
                "Gemini API error (status {}): {}",
                status,
                provider_message(&body)
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            GenerationError::Provider(format!("Failed to parse Gemini response: {e}"))
        })?;

        Self::extract_text(&parsed).ok_or(GenerationError::EmptyResponse)
    }
}
