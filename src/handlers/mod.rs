// handlers/mod.rs - HTTP handlers
//
// posts: the /posts resource under the versioned API prefix
// root and health live here and are never authenticated

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub mod posts;

/// GET / - service information; `prefix` is the mount point of the resource routes
pub async fn root(prefix: String) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": version,
        "endpoints": {
            "posts": format!("{}/posts", prefix),
            "post": format!("{}/posts/:id", prefix),
            "health": "/health",
        }
    }))
}

/// GET /health - reports whether the post store is reachable
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.posts.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
