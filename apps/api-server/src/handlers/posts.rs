//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blogsmith_core::domain::{NewPost, Post, PostEntry};
use blogsmith_core::error::RepoError;
use blogsmith_shared::dto::{CreatePostRequest, PostListItem, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const UNREADABLE_POST: &str = "Failed to serialize document";

fn new_post(req: CreatePostRequest) -> NewPost {
    NewPost {
        title: req.title,
        content: req.content,
        author: req.author,
        slug: req.slug,
        tags: req.tags,
        seo_title: req.seo_title,
        seo_description: req.seo_description,
    }
}

/// Public shape of a post.
fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        slug: post.slug,
        tags: post.tags,
        seo_title: post.seo_title,
        seo_description: post.seo_description,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

fn list_item(entry: PostEntry) -> PostListItem {
    match entry {
        PostEntry::Valid(post) => PostListItem::Post(post_response(post)),
        PostEntry::Malformed { .. } => PostListItem::Unreadable {
            error: UNREADABLE_POST.to_string(),
        },
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = new_post(body.into_inner());
    post.validate()?;

    tracing::info!(title = %post.title, slug = %post.slug, "Creating new post");

    let created = state.posts.create(post).await.map_err(|e| match e {
        dup @ RepoError::Duplicate(_) => AppError::from(dup),
        other => AppError::Internal(format!("Failed to create post: {other}")),
    })?;

    tracing::info!(id = %created.id, "Post created");
    Ok(HttpResponse::Ok().json(post_response(created)))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries = state
        .posts
        .list()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch posts: {e}")))?;

    tracing::debug!(count = entries.len(), "Returning posts");
    let items: Vec<PostListItem> = entries.into_iter().map(list_item).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/posts/{id} - `id` may also be a slug.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find(&id)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch post: {e}")))?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}
