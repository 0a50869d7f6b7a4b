//! Demo repository - stands in for the document store when it is unreachable.

use async_trait::async_trait;
use chrono::Utc;

use blogsmith_core::domain::{NewPost, Post, PostEntry};
use blogsmith_core::error::RepoError;
use blogsmith_core::ports::{PostRepository, StorageMode};

const WELCOME_ID: &str = "demo_1";
const WELCOME_SLUG: &str = "welcome-demo";

/// Serves a fixed welcome post and echoes submissions without storing them.
pub struct DemoPostRepository;

impl DemoPostRepository {
    /// The single post every listing returns, stamped with the current time.
    pub fn welcome_post() -> Post {
        let mut post = NewPost::new(
            "Welcome to AI Blog Platform",
            "This is a demo post. Connect to MongoDB Atlas to save real posts.",
            WELCOME_SLUG,
        );
        post.author = "System".to_string();
        post.tags = vec!["demo".to_string(), "welcome".to_string()];
        post.seo_title = Some("Welcome Demo".to_string());
        post.seo_description = Some("Demo post for AI Blog Platform".to_string());

        Post::new(WELCOME_ID.to_string(), post, Utc::now())
    }
}

#[async_trait]
impl PostRepository for DemoPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        tracing::info!(slug = %post.slug, "Demo post created (database not connected)");
        Ok(Post::new(format!("demo_{}", now.timestamp()), post, now))
    }

    async fn list(&self) -> Result<Vec<PostEntry>, RepoError> {
        tracing::debug!("Returning demo posts (database not connected)");
        Ok(vec![PostEntry::Valid(Self::welcome_post())])
    }

    async fn find(&self, id_or_slug: &str) -> Result<Option<Post>, RepoError> {
        if id_or_slug == WELCOME_ID || id_or_slug == WELCOME_SLUG {
            Ok(Some(Self::welcome_post()))
        } else {
            Ok(None)
        }
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Err(RepoError::Connection("running in demo mode".to_string()))
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Demo
    }
}
