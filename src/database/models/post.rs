use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::ValidatedFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a post that does not exist yet; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Apply only the supplied fields and bump `updated_at`
    pub fn merge(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

impl NewPost {
    /// Build from a create payload; `None` when a required field was not validated
    pub fn from_fields(mut fields: ValidatedFields) -> Option<Self> {
        Some(Self {
            title: fields.remove("title")?,
            content: fields.remove("content")?,
        })
    }
}

impl From<ValidatedFields> for PostChanges {
    fn from(mut fields: ValidatedFields) -> Self {
        Self {
            title: fields.remove("title"),
            content: fields.remove("content"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: "old title".to_string(),
            content: "old content".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn merge_keeps_unsupplied_fields() {
        let mut p = post();
        let before = p.clone();
        p.merge(PostChanges {
            title: Some("new title".to_string()),
            content: None,
        });

        assert_eq!(p.title, "new title");
        assert_eq!(p.content, before.content);
        assert_eq!(p.id, before.id);
        assert_eq!(p.created_at, before.created_at);
        assert!(p.updated_at >= before.updated_at);
    }

    #[test]
    fn new_post_requires_both_fields() {
        let mut fields = ValidatedFields::new();
        fields.insert("title", "t".to_string());
        assert!(NewPost::from_fields(fields.clone()).is_none());

        fields.insert("content", "c".to_string());
        let new_post = NewPost::from_fields(fields).unwrap();
        assert_eq!(new_post.title, "t");
        assert_eq!(new_post.content, "c");
    }

    #[test]
    fn serializes_snake_case_timestamps() {
        let value = serde_json::to_value(post()).unwrap();
        for key in ["id", "title", "content", "created_at", "updated_at"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
