use serde_json::json;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, PgPostStore, PostFactory};

pub async fn handle(config: &AppConfig, count: usize, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database).await?;
    let store = PgPostStore::new(pool);

    let posts = PostFactory::create_many(&store, count).await?;
    tracing::info!("Seeded {} posts", posts.len());
    store.pool().close().await;

    let ids: Vec<String> = posts.iter().map(|post| post.id.to_string()).collect();
    output_success(
        output_format,
        &format!("Created {} posts", posts.len()),
        Some(json!({ "ids": ids })),
    )
}
