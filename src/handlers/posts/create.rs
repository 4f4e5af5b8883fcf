use axum::{response::Json, Extension};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{post_to_api, PostDto};
use crate::database::{DatabaseManager, PostRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub text_content: String,
    /// Optional reply target. Must reference an existing post.
    pub parent: Option<Uuid>,
}

/// POST /posts - Create a post, optionally as a reply
///
/// Gate steps 1-2 ran in middleware; there is no ownership step because a
/// new post has no pre-existing owner. The author is always the decoded
/// identity, never anything from the body.
pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreatePostRequest>,
) -> ApiResult<PostDto> {
    if payload.text_content.trim().is_empty() {
        return Err(ApiError::bad_request("text_content must not be empty"));
    }

    let pool = DatabaseManager::pool().await?;
    let posts = PostRepository::new(pool);

    if let Some(parent_id) = payload.parent {
        if !posts.exists(parent_id).await? {
            return Err(ApiError::not_found(format!(
                "parent post {} does not exist",
                parent_id
            )));
        }
    }

    let post = posts
        .insert(&payload.text_content, user.id, payload.parent)
        .await?;

    tracing::info!(post_id = %post.id, author = %user.id, "created post");

    Ok(ApiResponse::created(post_to_api(&post)))
}
