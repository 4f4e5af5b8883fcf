use axum::{extract::Path, Extension};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::{DatabaseManager, PostRepository, ShareRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /posts/:id/share - Record that the caller shared a post
///
/// Any authenticated user may share any existing post, including their own;
/// there is no ownership step. Repeat shares are idempotent.
pub async fn share(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;

    let posts = PostRepository::new(pool.clone());
    if !posts.exists(id).await? {
        return Err(ApiError::not_found(format!("post {} not found", id)));
    }

    let shares = ShareRepository::new(pool);
    let inserted = shares.insert(id, user.id).await?;
    if inserted {
        tracing::info!(post_id = %id, user = %user.id, "shared post");
    }

    Ok(ApiResponse::created(json!({
        "shared": true,
        "post_id": id,
    })))
}

/// DELETE /posts/:id/share - Withdraw the caller's share of a post
///
/// Scoped to the (post, caller) pair. The post's own existence is not
/// re-verified: a pair that was never shared is its own distinct outcome.
pub async fn unshare(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let shares = ShareRepository::new(pool);

    let rows = shares.delete(id, user.id).await?;
    if rows == 0 {
        return Err(ApiError::not_found(format!(
            "post {} was not shared by this user",
            id
        )));
    }

    tracing::info!(post_id = %id, user = %user.id, "unshared post");

    Ok(ApiResponse::success(json!({
        "shared": false,
        "post_id": id,
    })))
}
