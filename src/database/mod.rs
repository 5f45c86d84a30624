pub mod factory;
pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use factory::PostFactory;
pub use manager::{migrator, DatabaseError, DatabaseManager};
pub use memory::MemoryPostStore;
pub use models::{NewPost, Post, PostChanges};
pub use postgres::PgPostStore;
pub use store::{PostStore, StoreError};
