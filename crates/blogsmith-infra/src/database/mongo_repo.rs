//! MongoDB post repository.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use blogsmith_core::domain::{NewPost, Post, PostEntry};
use blogsmith_core::error::RepoError;
use blogsmith_core::ports::{PostRepository, StorageMode};

use super::connections::{self, MongoConfig};
use super::document::{self, PostDocument};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Post repository backed by a MongoDB collection.
pub struct MongoPostRepository {
    posts: Collection<PostDocument>,
    raw: Collection<Document>,
}

impl MongoPostRepository {
    /// Connect to the configured deployment and prepare the posts collection.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RepoError> {
        let database = connections::connect(config)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let repo = Self::new(&database, &config.collection);
        repo.ensure_slug_index().await;
        Ok(repo)
    }

    pub fn new(database: &Database, collection: &str) -> Self {
        let raw: Collection<Document> = database.collection(collection);
        Self {
            posts: raw.clone_with_type(),
            raw,
        }
    }

    /// Slugs are unique at the storage layer, not only by the pre-insert check.
    async fn ensure_slug_index(&self) {
        let index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match self.raw.create_index(index).await {
            Ok(result) => tracing::debug!(index = %result.index_name, "Slug index ready"),
            Err(e) => tracing::warn!("Could not create unique slug index: {}", e),
        }
    }

    async fn read_one(&self, filter: Document) -> Result<Option<Post>, RepoError> {
        let raw = self.raw.find_one(filter).await.map_err(query_error)?;
        raw.map(document::decode).transpose()
    }
}

fn query_error(e: MongoError) -> RepoError {
    RepoError::Query(e.to_string())
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// Filter matching a post by ObjectId or slug.
fn lookup_filter(id_or_slug: &str) -> Document {
    match ObjectId::parse_str(id_or_slug) {
        Ok(oid) => doc! { "$or": [ { "_id": oid }, { "slug": id_or_slug } ] },
        Err(_) => doc! { "slug": id_or_slug },
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let slug = post.slug.clone();

        if self
            .raw
            .find_one(doc! { "slug": slug.as_str() })
            .await
            .map_err(query_error)?
            .is_some()
        {
            return Err(RepoError::Duplicate(slug));
        }

        let document = PostDocument::new(post, Utc::now());
        let result = self.posts.insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepoError::Duplicate(slug.clone())
            } else {
                query_error(e)
            }
        })?;
        tracing::info!(id = %result.inserted_id, slug = %slug, "Post inserted");

        self.read_one(doc! { "_id": result.inserted_id })
            .await?
            .ok_or_else(|| RepoError::Query("Failed to retrieve created post".to_string()))
    }

    async fn list(&self) -> Result<Vec<PostEntry>, RepoError> {
        let mut cursor = self
            .raw
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(query_error)?;

        let mut entries = Vec::new();
        while cursor.advance().await.map_err(query_error)? {
            let entry = match cursor.deserialize_current() {
                Ok(raw) => document::decode_entry(raw),
                Err(e) => {
                    tracing::error!("Unreadable document in posts cursor: {}", e);
                    PostEntry::Malformed {
                        id: None,
                        reason: e.to_string(),
                    }
                }
            };
            entries.push(entry);
        }

        tracing::debug!(count = entries.len(), "Fetched posts");
        Ok(entries)
    }

    async fn find(&self, id_or_slug: &str) -> Result<Option<Post>, RepoError> {
        self.read_one(lookup_filter(id_or_slug)).await
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.raw
            .find_one(doc! {})
            .await
            .map(|_| ())
            .map_err(|e| RepoError::Connection(e.to_string()))
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Connected
    }
}
