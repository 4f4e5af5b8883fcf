use axum::{extract::Path, response::Json, Extension};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{post_to_api, PostDto};
use crate::database::{DatabaseManager, PostRepository};
use crate::error::ApiError;
use crate::middleware::{require_owner, ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub text_content: String,
}

/// PUT /posts/:id - Overwrite a post's text. Author only.
///
/// Only `text_content` is mutable; `author_id` and `parent_id` are
/// write-once at creation.
pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> ApiResult<PostDto> {
    if payload.text_content.trim().is_empty() {
        return Err(ApiError::bad_request("text_content must not be empty"));
    }

    let pool = DatabaseManager::pool().await?;
    let posts = PostRepository::new(pool);

    // Gate step 3: load the target and check ownership
    let post = posts
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("post {} not found", id)))?;
    require_owner(post.author_id, &user)?;

    // The existence check already passed, so an empty update is a
    // consistency anomaly, not a NotFound
    let updated = posts
        .update_text(id, &payload.text_content)
        .await?
        .ok_or_else(|| {
            tracing::error!(post_id = %id, "post vanished between ownership check and update");
            ApiError::internal_server_error("post update affected no rows")
        })?;

    Ok(ApiResponse::success(post_to_api(&updated)))
}
