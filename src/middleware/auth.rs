use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Authentication check for protected handlers.
///
/// Declared as the first handler argument, it runs before the path, the body
/// or the store are touched, so an unauthenticated request is rejected with
/// 401 before any other processing.
#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = state.auth.authenticate(&parts.headers)?;
        tracing::debug!("Authenticated request {} {} as '{}'", parts.method, parts.uri.path(), user.subject);
        Ok(user)
    }
}
