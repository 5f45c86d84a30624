// handlers/posts.rs - /posts resource handlers
//
// GET list and show are public. POST, PATCH and DELETE take `AuthUser` as
// their first argument so authentication is checked before anything else.

use axum::{
    body::Bytes,
    extract::{Path, State},
};
use serde_json::{Map, Value};

use crate::auth::AuthUser;
use crate::database::Post;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /posts - every post currently stored
pub async fn index(State(state): State<AppState>) -> ApiResult<Vec<Post>> {
    let posts = state.posts.list().await?;
    Ok(ApiResponse::ok(posts))
}

/// POST /posts - create a post from `{title, content}`
pub async fn store(user: AuthUser, State(state): State<AppState>, body: Bytes) -> ApiResult<Post> {
    let body = json_object(&body)?;
    tracing::debug!("'{}' creating post", user.subject);

    let post = state.posts.create(&body).await?;
    Ok(ApiResponse::created(post))
}

/// GET /posts/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Post> {
    let post = state.posts.show(&id).await?;
    Ok(ApiResponse::ok(post))
}

/// PATCH /posts/:id - merge any of `{title, content}` into the post
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Post> {
    let body = json_object(&body)?;
    tracing::debug!("'{}' updating post {}", user.subject, id);

    let post = state.posts.update(&id, &body).await?;
    Ok(ApiResponse::ok(post))
}

/// DELETE /posts/:id - responds with the removed post
pub async fn destroy(user: AuthUser, State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Post> {
    tracing::debug!("'{}' deleting post {}", user.subject, id);

    let post = state.posts.delete(&id).await?;
    Ok(ApiResponse::ok(post))
}

/// Parse a request body as a JSON object. An empty body reads as `{}`.
fn json_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::bad_request("Request body must be a JSON object")),
        Err(e) => Err(ApiError::bad_request(format!("Invalid JSON body: {}", e))),
    }
}
