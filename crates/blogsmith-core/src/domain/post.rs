use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Author recorded when a post is submitted without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a post from submitted fields, stamping both timestamps with `at`.
    pub fn new(id: String, post: NewPost, at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: post.title,
            content: post.content,
            author: post.author,
            slug: post.slug,
            tags: post.tags,
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Fields a client submits to create a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl NewPost {
    /// Create a submission with the default author and no tags or SEO fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: DEFAULT_AUTHOR.to_string(),
            slug: slug.into(),
            tags: Vec::new(),
            seo_title: None,
            seo_description: None,
        }
    }

    /// Check that every required field is non-empty.
    ///
    /// All offending fields are reported together.
    pub fn validate(&self) -> Result<(), DomainError> {
        let errors: Vec<String> = [
            ("title", &self.title),
            ("content", &self.content),
            ("slug", &self.slug),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| format!("{field} is required"))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

/// One element of a post listing.
///
/// A stored document that cannot be decoded does not fail the whole listing;
/// it is reported in place as `Malformed`.
#[derive(Debug, Clone, PartialEq)]
pub enum PostEntry {
    Valid(Post),
    Malformed { id: Option<String>, reason: String },
}

impl PostEntry {
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            PostEntry::Valid(post) => Some(post),
            PostEntry::Malformed { .. } => None,
        }
    }
}
