use std::sync::Arc;

use crate::auth::Authenticator;
use crate::database::PostStore;
use crate::services::PostService;

/// Shared handler state: the post service and the identity collaborator
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            posts: PostService::new(store),
            auth,
        }
    }
}
