use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

use crate::auth::Claims;
use crate::config;
use crate::error::ApiError;

/// Authenticated caller context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub handle: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            handle: claims.handle,
        }
    }
}

/// Bearer authentication middleware: the first two steps of the
/// authorization gate shared by every mutating post operation.
///
/// 1. No Authorization header at all -> `MissingCredential` (400).
/// 2. Header present but the token does not decode to an identity with a
///    usable id -> `InvalidCredential` (401).
///
/// Each failure terminates the request here; no handler body runs. On
/// success an [`AuthUser`] extension is injected for the handler to consume.
pub async fn bearer_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_from_headers(&headers)?;
    let claims = validate_jwt(&token)?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Step 3 of the gate: the ownership predicate. Composed explicitly by the
/// handlers that mutate an existing resource, after they have loaded it.
pub fn require_owner(author_id: Uuid, user: &AuthUser) -> Result<(), ApiError> {
    if author_id != user.id {
        return Err(ApiError::forbidden(
            "only the author of a post may modify it",
        ));
    }
    Ok(())
}

/// Extract the bearer token from the Authorization header.
///
/// A missing header is `MissingCredential`; a header that is present but
/// not in `Bearer <token>` shape is `InvalidCredential` (a credential was
/// supplied, it just isn't usable).
fn extract_bearer_from_headers(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| ApiError::missing_credential("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::invalid_credential("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        Some(_) => Err(ApiError::invalid_credential("Empty bearer token")),
        None => Err(ApiError::invalid_credential(
            "Authorization header must use Bearer token format",
        )),
    }
}

/// Validate the token and extract claims
fn validate_jwt(token: &str) -> Result<Claims, ApiError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        tracing::error!("JWT secret not configured");
        return Err(ApiError::internal_server_error("Service is misconfigured"));
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| ApiError::invalid_credential(format!("Invalid bearer token: {}", e)))?;

    // A decodable token whose subject is not a real id is still unusable
    if token_data.claims.sub.is_nil() {
        return Err(ApiError::invalid_credential(
            "Bearer token carries no user id",
        ));
    }

    Ok(token_data.claims)
}
