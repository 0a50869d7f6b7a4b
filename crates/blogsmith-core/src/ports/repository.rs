use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostEntry};
use crate::error::RepoError;

/// Which kind of storage backs a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Posts are persisted.
    Connected,
    /// Static and synthetic posts only; nothing is written.
    Demo,
}

/// Post repository - the storage capability the API depends on.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post. Fails with `RepoError::Duplicate` when the slug is taken.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<PostEntry>, RepoError>;

    /// Look a post up by its id or, failing that, its slug.
    async fn find(&self, id_or_slug: &str) -> Result<Option<Post>, RepoError>;

    /// Live connectivity check.
    async fn ping(&self) -> Result<(), RepoError>;

    fn mode(&self) -> StorageMode;
}
