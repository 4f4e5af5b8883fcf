use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use crate::middleware::bearer_auth_middleware;

/// Build the application router
pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(auth_public_routes())
        // Post operations (reads public, mutations behind the bearer gate)
        .merge(post_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes() -> Router {
    use handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn post_routes() -> Router {
    use axum::routing::put;
    use handlers::posts;

    let auth = from_fn(bearer_auth_middleware);

    Router::new()
        .route("/posts", post(posts::create).route_layer(auth.clone()))
        // GET stays public; PUT and DELETE go through the gate
        .route(
            "/posts/:id",
            get(posts::get).merge(
                put(posts::update)
                    .delete(posts::delete)
                    .route_layer(auth.clone()),
            ),
        )
        .route(
            "/posts/:id/share",
            post(posts::share).delete(posts::unshare).route_layer(auth),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Quill API",
            "version": version,
            "description": "Minimal social-posting backend (posts, replies, shares)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/register, /auth/login (public - token acquisition)",
                "posts": "POST /posts, GET|PUT|DELETE /posts/:id (mutations require bearer token)",
                "shares": "POST|DELETE /posts/:id/share (requires bearer token)",
            }
        }
    }))
}

async fn health() -> axum::response::Response {
    use axum::response::IntoResponse;

    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        )
            .into_response(),
        Err(e) => {
            // The failure detail stays in the server log; the client only
            // learns that the database is unreachable
            tracing::error!("health check failed: {}", e);
            crate::error::ApiError::service_unavailable("database unreachable").into_response()
        }
    }
}
