use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::models::{NewPost, Post, PostChanges};

/// Errors raised by a post store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Post {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage collaborator that owns every post record.
///
/// Implementations assign ids and timestamps and are responsible for their own
/// concurrency safety; callers hold no copies between requests.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts ordered by creation time
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    async fn insert(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Merge the supplied fields into an existing post
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError>;

    /// Hard delete
    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;

    /// Connectivity check used by /health
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
