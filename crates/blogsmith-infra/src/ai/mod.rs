//! Generation provider integration.

#[cfg(feature = "gemini")]
mod gemini;
#[cfg(feature = "gemini")]
mod types;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;

mod config;

pub use config::GeminiConfig;
