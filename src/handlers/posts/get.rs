use axum::extract::Path;
use uuid::Uuid;

use crate::api::{post_to_api, PostDto};
use crate::database::{DatabaseManager, PostRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /posts/:id - Fetch a single post. Read access is public.
pub async fn get(Path(id): Path<Uuid>) -> ApiResult<PostDto> {
    let pool = DatabaseManager::pool().await?;
    let posts = PostRepository::new(pool);

    let post = posts
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("post {} not found", id)))?;

    Ok(ApiResponse::success(post_to_api(&post)))
}
