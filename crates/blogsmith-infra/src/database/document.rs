//! Stored representation of a post and its mapping to the domain type.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blogsmith_core::domain::{DEFAULT_AUTHOR, NewPost, Post, PostEntry};
use blogsmith_core::error::RepoError;

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// A post as stored in the `posts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl PostDocument {
    /// A document ready for insertion; the store assigns `_id`.
    pub fn new(post: NewPost, at: DateTime<Utc>) -> Self {
        let at = bson::DateTime::from_millis(at.timestamp_millis());
        Self {
            id: None,
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

fn to_utc(value: bson::DateTime, field: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| RepoError::Serialization(format!("{field} is out of range")))
}

impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| RepoError::Serialization("document has no _id".to_string()))?;

        Ok(Self {
            id: id.to_hex(),
            title: doc.title,
            content: doc.content,
            author: doc.author,
            slug: doc.slug,
            tags: doc.tags,
            seo_title: doc.seo_title,
            seo_description: doc.seo_description,
            created_at: to_utc(doc.created_at, "created_at")?,
            updated_at: to_utc(doc.updated_at, "updated_at")?,
        })
    }
}

/// Decode a raw stored document into a post.
pub fn decode(raw: Document) -> Result<Post, RepoError> {
    let doc: PostDocument =
        bson::from_document(raw).map_err(|e| RepoError::Serialization(e.to_string()))?;
    Post::try_from(doc)
}

/// Decode a raw stored document for a listing, turning failures into a
/// placeholder entry.
pub fn decode_entry(raw: Document) -> PostEntry {
    let id = raw.get_object_id("_id").ok().map(|oid| oid.to_hex());

    match decode(raw) {
        Ok(post) => PostEntry::Valid(post),
        Err(e) => {
            tracing::error!(id = ?id, error = %e, "Error serializing stored post");
            PostEntry::Malformed {
                id,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stored_document_maps_to_post() {
        let oid = ObjectId::new();
        let at = bson::DateTime::from_millis(1_700_000_000_123);
        let raw = doc! {
            "_id": oid,
            "title": "Hello",
            "content": "World",
            "author": "Anonymous",
            "slug": "hello",
            "tags": ["a", "b"],
            "seo_title": null,
            "seo_description": "desc",
            "created_at": at,
            "updated_at": at,
        };

        let post = decode(raw).unwrap();
        assert_eq!(post.id, oid.to_hex());
        assert_eq!(post.tags, vec!["a", "b"]);
        assert_eq!(post.seo_title, None);
        assert_eq!(post.seo_description.as_deref(), Some("desc"));
        assert_eq!(post.created_at.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_new_document_round_trips_fields() {
        let now = Utc::now();
        let mut submitted = NewPost::new("T", "C", "t");
        submitted.tags = vec!["x".to_string()];

        let mut doc = PostDocument::new(submitted.clone(), now);
        assert!(doc.id.is_none());
        doc.id = Some(ObjectId::new());

        let post = Post::try_from(doc).unwrap();
        assert_eq!(post.title, submitted.title);
        assert_eq!(post.tags, submitted.tags);
        assert_eq!(post.created_at.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let at = bson::DateTime::now();
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": "T",
            "content": "C",
            "slug": "t",
            "created_at": at,
            "updated_at": at,
        };

        let post = decode(raw).unwrap();
        assert_eq!(post.author, "Anonymous");
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_malformed_document_becomes_placeholder() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "title": 42 };

        match decode_entry(raw) {
            PostEntry::Malformed { id, .. } => assert_eq!(id, Some(oid.to_hex())),
            PostEntry::Valid(post) => panic!("expected placeholder, got {post:?}"),
        }
    }

    #[test]
    fn test_document_without_id_is_rejected() {
        let doc = PostDocument::new(NewPost::new("T", "C", "t"), Utc::now());
        assert!(matches!(
            Post::try_from(doc),
            Err(RepoError::Serialization(_))
        ));
    }
}
