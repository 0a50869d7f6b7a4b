//! Application configuration loaded from environment variables.

use std::env;

use blogsmith_infra::{GeminiConfig, MongoConfig};

/// Fragments of the sample `.env` values; a setting containing one was never filled in.
const MONGODB_URI_PLACEHOLDERS: &[&str] = &["your_mongodb_uri"];
const API_KEY_PLACEHOLDERS: &[&str] = &["your_actual", "your_gemini", "your_api_key"];

const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server in demo mode.
    pub mongo: Option<MongoConfig>,
    /// `None` leaves the AI service unconfigured.
    pub gemini: Option<GeminiConfig>,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mongo = usable_setting(env::var("MONGODB_URI").ok(), MONGODB_URI_PLACEHOLDERS).map(
            |uri| {
                let mut config = MongoConfig::new(uri);
                if let Ok(database) = env::var("MONGODB_DATABASE") {
                    config.database = database;
                }
                if let Ok(collection) = env::var("MONGODB_COLLECTION") {
                    config.collection = collection;
                }
                config
            },
        );

        let gemini = usable_setting(env::var("GEMINI_API_KEY").ok(), API_KEY_PLACEHOLDERS).map(
            |api_key| {
                let mut config = GeminiConfig::new(api_key);
                if let Ok(model) = env::var("GEMINI_MODEL") {
                    config = config.with_model(model);
                }
                if let Some(tokens) = parse_var("GEMINI_MAX_OUTPUT_TOKENS") {
                    config.max_output_tokens = tokens;
                }
                if let Some(temperature) = parse_var("GEMINI_TEMPERATURE") {
                    config.temperature = temperature;
                }
                config
            },
        );

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT").unwrap_or(8000),
            mongo,
            gemini,
            cors_origins: parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok()),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// The trimmed value, unless it is blank or still a sample placeholder.
fn usable_setting(value: Option<String>, placeholders: &[&str]) -> Option<String> {
    let value = value?.trim().to_string();
    let lowered = value.to_lowercase();

    if value.is_empty() || placeholders.iter().any(|p| lowered.contains(p)) {
        None
    } else {
        Some(value)
    }
}

/// Parse a comma-separated origin list.
/// Format: CORS_ALLOWED_ORIGINS=http://localhost:3000,http://127.0.0.1:3000
fn parse_origins(value: Option<String>) -> Vec<String> {
    let origins: Vec<String> = value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        // Credentials are allowed, so a wildcard origin is never accepted.
        .filter(|o| !o.is_empty() && *o != "*")
        .map(String::from)
        .collect();

    if origins.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_setting_is_unusable() {
        assert_eq!(usable_setting(None, API_KEY_PLACEHOLDERS), None);
        assert_eq!(usable_setting(Some("  ".to_string()), API_KEY_PLACEHOLDERS), None);
    }

    #[test]
    fn test_placeholder_values_are_rejected() {
        assert_eq!(
            usable_setting(
                Some("your_actual_gemini_api_key_here".to_string()),
                API_KEY_PLACEHOLDERS
            ),
            None
        );
        assert_eq!(
            usable_setting(
                Some("mongodb+srv://YOUR_MONGODB_URI".to_string()),
                MONGODB_URI_PLACEHOLDERS
            ),
            None
        );
    }

    #[test]
    fn test_real_values_are_kept_trimmed() {
        assert_eq!(
            usable_setting(Some(" AIzaSyExample123 ".to_string()), API_KEY_PLACEHOLDERS),
            Some("AIzaSyExample123".to_string())
        );
    }

    #[test]
    fn test_default_cors_origins() {
        assert_eq!(
            parse_origins(None),
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn test_cors_origins_drop_wildcard() {
        assert_eq!(
            parse_origins(Some("https://blog.example.com, *".to_string())),
            vec!["https://blog.example.com"]
        );
        assert_eq!(parse_origins(Some("*".to_string())).len(), 2);
    }
}
