use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::{DatabaseManager, UserRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::verify_password;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub handle: String,
    pub password: String,
}

/// POST /auth/login - Verify credentials and mint a bearer token
pub async fn login(Json(payload): Json<LoginRequest>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let users = UserRepository::new(pool);

    let user = users
        .fetch_by_handle(payload.handle.trim())
        .await?
        .ok_or_else(|| ApiError::invalid_credential("invalid handle or password"))?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(ApiError::invalid_credential("invalid handle or password"));
    }

    let token = generate_jwt(Claims::new(user.id, user.handle.clone())).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("could not issue token")
    })?;

    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(ApiResponse::success(json!({
        "token": token,
        "user": {
            "id": user.id,
            "handle": user.handle,
        },
        "expires_in": expires_in,
    })))
}
