use axum::{extract::Path, Extension};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::{DatabaseManager, PostRepository};
use crate::error::ApiError;
use crate::middleware::{require_owner, ApiResponse, ApiResult, AuthUser};

/// DELETE /posts/:id - Remove a post. Author only.
///
/// Shares of the post cascade-delete and replies are orphaned in place
/// (parent_id set to null) by the schema constraints.
pub async fn delete(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let posts = PostRepository::new(pool);

    // Gate step 3: load the target and check ownership
    let post = posts
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("post {} not found", id)))?;
    require_owner(post.author_id, &user)?;

    let rows = posts.delete(id).await?;
    if rows == 0 {
        tracing::error!(post_id = %id, "post vanished between ownership check and delete");
        return Err(ApiError::internal_server_error(
            "post delete affected no rows",
        ));
    }

    tracing::info!(post_id = %id, author = %user.id, "deleted post");

    Ok(ApiResponse::success(json!({ "deleted": true, "id": id })))
}
