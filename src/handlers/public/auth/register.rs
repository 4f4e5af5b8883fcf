use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::manager::DatabaseError;
use crate::database::{DatabaseManager, UserRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::hash_password;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub handle: String,
    pub password: String,
}

/// POST /auth/register - Create a new user account
///
/// Returns 201 with the new user's id and handle. A taken handle is a 409.
pub async fn register(Json(payload): Json<RegisterRequest>) -> ApiResult<Value> {
    let handle = payload.handle.trim();
    if handle.is_empty() {
        return Err(ApiError::bad_request("handle must not be empty"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::bad_request("password must not be empty"));
    }

    let pool = DatabaseManager::pool().await?;
    let users = UserRepository::new(pool);

    let user = match users.insert(handle, &hash_password(&payload.password)).await {
        Ok(user) => user,
        Err(DatabaseError::Sqlx(sqlx::Error::Database(db_err)))
            if db_err.code().as_deref() == Some("23505") =>
        {
            return Err(ApiError::conflict(format!(
                "handle '{}' is already taken",
                handle
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.id, handle = %user.handle, "registered user");

    Ok(ApiResponse::created(json!({
        "id": user.id,
        "handle": user.handle,
    })))
}
