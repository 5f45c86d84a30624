use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{NewPost, Post, PostChanges};
use super::store::{PostStore, StoreError};

const POST_COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Post store backed by the `posts` table
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let sql = format!("SELECT {} FROM posts ORDER BY created_at, id", POST_COLUMNS);
        let posts = sqlx::query_as::<_, Post>(&sql).fetch_all(&self.pool).await?;
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let sql = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let sql = format!(
            "INSERT INTO posts (title, content) VALUES ($1, $2) RETURNING {}",
            POST_COLUMNS
        );
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(post.title)
            .bind(post.content)
            .fetch_one(&self.pool)
            .await?;
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        // NULL parameters keep the stored column value
        let sql = format!(
            "UPDATE posts \
             SET title = COALESCE($2, title), content = COALESCE($3, content), updated_at = now() \
             WHERE id = $1 RETURNING {}",
            POST_COLUMNS
        );
        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .bind(changes.title)
            .bind(changes.content)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
