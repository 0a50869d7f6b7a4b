//! In-memory post repository - persists for the lifetime of the process.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blogsmith_core::domain::{NewPost, Post, PostEntry};
use blogsmith_core::error::RepoError;
use blogsmith_core::ports::{PostRepository, StorageMode};

/// In-memory post store using a Vec behind an async RwLock.
///
/// Slug uniqueness is checked and the insert performed under one write lock,
/// so concurrent creations with the same slug cannot both succeed.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    next_id: u64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        if store.posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Duplicate(post.slug));
        }

        store.next_id += 1;
        let post = Post::new(format!("mem_{}", store.next_id), post, Utc::now());
        store.posts.push(post.clone());

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<PostEntry>, RepoError> {
        let store = self.store.read().await;

        // Newest first; insertion order breaks timestamp ties.
        let mut posts: Vec<&Post> = store.posts.iter().collect();
        posts.reverse();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts.into_iter().cloned().map(PostEntry::Valid).collect())
    }

    async fn find(&self, id_or_slug: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        let found = store
            .posts
            .iter()
            .find(|p| p.id == id_or_slug)
            .or_else(|| store.posts.iter().find(|p| p.slug == id_or_slug));

        Ok(found.cloned())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Connected
    }
}
