use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{NewPost, Post, PostChanges};
use super::store::{PostStore, StoreError};

/// In-process store used when no database is configured, and by tests.
/// Posts are kept in insertion order, which is creation order.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.iter().find(|post| post.id == id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::NotFound(id))?;
        post.merge(changes);
        Ok(post.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(StoreError::NotFound(id))?;
        posts.remove(index);
        Ok(())
    }
}
