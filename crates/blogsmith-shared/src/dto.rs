//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

fn default_author() -> String {
    "Anonymous".to_string()
}

/// Request to create a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A stored post as returned to clients. Timestamps are ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// One element of `GET /api/posts`.
///
/// Stored documents that could not be read are listed as an error placeholder
/// instead of failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostListItem {
    Post(PostResponse),
    Unreadable { error: String },
}

/// Request to draft blog content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub prompt: String,
}

/// Generated blog content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    Connected,
    DemoMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiServiceStatus {
    Configured,
    NotConfigured,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
    pub database: DatabaseStatus,
    pub ai_service: AiServiceStatus,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy`, or `error` when the health check itself failed.
    pub status: String,
    pub database: DatabaseStatus,
    /// Outcome of the live database check, independent of the startup flag.
    pub database_healthy: bool,
    pub ai_service: AiServiceStatus,
    pub backend: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_create_post_request_defaults() {
        let req: CreatePostRequest =
            serde_json::from_value(json!({"title": "Hello", "content": "World", "slug": "hello"}))
                .unwrap();
        assert_eq!(req.author, "Anonymous");
        assert!(req.tags.is_empty());
        assert_eq!(req.seo_title, None);
    }

    #[test]
    fn test_create_post_request_requires_slug() {
        let result: Result<CreatePostRequest, _> =
            serde_json::from_value(json!({"title": "Hello", "content": "World"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unreadable_item_serializes_as_error_object() {
        let item = PostListItem::Unreadable {
            error: "Failed to serialize document".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"error": "Failed to serialize document"})
        );
    }

    #[test]
    fn test_status_enums_use_wire_names() {
        assert_eq!(serde_json::to_value(DatabaseStatus::DemoMode).unwrap(), json!("demo_mode"));
        assert_eq!(
            serde_json::to_value(AiServiceStatus::NotConfigured).unwrap(),
            json!("not_configured")
        );
    }

    #[test]
    fn test_post_response_keeps_null_seo_fields() {
        let post = PostResponse {
            id: "1".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            author: "Anonymous".to_string(),
            slug: "t".to_string(),
            tags: vec![],
            seo_title: None,
            seo_description: None,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["seo_title"], json!(null));
        assert_eq!(value["tags"], json!([]));
    }
}
