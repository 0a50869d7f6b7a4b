//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Duplicate slug: {0}")]
    Duplicate(String),

    #[error("Malformed stored document: {0}")]
    Serialization(String),
}

/// Content generation errors.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("AI service not configured. Please add GEMINI_API_KEY to .env file")]
    NotConfigured,

    /// The provider rejected the request or could not be reached. The
    /// provider's own message is kept verbatim.
    #[error("{0}")]
    Provider(String),

    #[error("Empty response from AI")]
    EmptyResponse,
}
