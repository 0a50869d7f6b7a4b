use async_trait::async_trait;

use crate::error::GenerationError;

/// Text generation provider.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Draft a blog post about `topic`.
    async fn generate_text(&self, topic: &str) -> Result<String, GenerationError>;
}
