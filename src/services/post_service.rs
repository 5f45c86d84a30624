use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::database::{NewPost, Post, PostChanges, PostStore, StoreError};
use crate::error::ApiError;
use crate::validation::{self, CREATE_POST, UPDATE_POST};

/// Business rules for the post resource, independent of HTTP extraction.
///
/// Authentication has already happened by the time these run; each method
/// validates its body (when it has one) before touching the store.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn PostStore> {
        &self.store
    }

    pub async fn list(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn create(&self, body: &Map<String, Value>) -> Result<Post, ApiError> {
        let fields = validation::validate(CREATE_POST, body)?;
        let new_post = NewPost::from_fields(fields)
            .ok_or_else(|| ApiError::internal_server_error("Validated post is missing fields"))?;

        let post = self.store.insert(new_post).await?;
        tracing::info!("Created post {}", post.id);
        Ok(post)
    }

    pub async fn show(&self, id: &str) -> Result<Post, ApiError> {
        self.find(id).await
    }

    /// Validate first, then resolve the post, then merge the supplied fields
    pub async fn update(&self, id: &str, body: &Map<String, Value>) -> Result<Post, ApiError> {
        let changes = PostChanges::from(validation::validate(UPDATE_POST, body)?);
        let post = self.find(id).await?;

        let updated = self.store.update(post.id, changes).await?;
        tracing::info!("Updated post {}", updated.id);
        Ok(updated)
    }

    /// Remove the post and hand back its last known state
    pub async fn delete(&self, id: &str) -> Result<Post, ApiError> {
        let post = self.find(id).await?;

        self.store.remove(post.id).await?;
        tracing::info!("Deleted post {}", post.id);
        Ok(post)
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    async fn find(&self, id: &str) -> Result<Post, ApiError> {
        // Ids that cannot name a post are indistinguishable from missing ones
        let Some(id) = parse_id(id) else {
            return Err(ApiError::post_not_found());
        };

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(ApiError::post_not_found)
    }
}

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
