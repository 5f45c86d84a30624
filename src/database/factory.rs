use rand::seq::SliceRandom;

use super::models::{NewPost, Post};
use super::store::{PostStore, StoreError};

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

/// Random but valid posts for seeding and tests
pub struct PostFactory;

impl PostFactory {
    pub const TITLE_WORDS: usize = 5;
    pub const CONTENT_WORDS: usize = 50;

    /// `count` random words separated by single spaces
    pub fn words(count: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..count)
            .filter_map(|_| WORDS.choose(&mut rng).copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn make() -> NewPost {
        NewPost {
            title: Self::words(Self::TITLE_WORDS),
            content: Self::words(Self::CONTENT_WORDS),
        }
    }

    pub async fn create(store: &dyn PostStore) -> Result<Post, StoreError> {
        store.insert(Self::make()).await
    }

    pub async fn create_many(store: &dyn PostStore, count: usize) -> Result<Vec<Post>, StoreError> {
        let mut posts = Vec::with_capacity(count);
        for _ in 0..count {
            posts.push(Self::create(store).await?);
        }
        Ok(posts)
    }
}
