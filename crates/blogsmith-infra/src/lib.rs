//! # Blogsmith Infrastructure
//!
//! Concrete implementations of the ports defined in `blogsmith-core`.
//! This crate contains the post repositories and the generation provider client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, demo and in-memory repositories only
//! - `mongodb` - MongoDB post repository
//! - `gemini` - Google Gemini content generation

pub mod ai;
pub mod database;

// Re-exports - In-Memory
pub use database::{DemoPostRepository, InMemoryPostRepository};

// Re-exports - External services
pub use ai::GeminiConfig;
pub use database::MongoConfig;

#[cfg(feature = "gemini")]
pub use ai::GeminiClient;
#[cfg(feature = "mongodb")]
pub use database::MongoPostRepository;
