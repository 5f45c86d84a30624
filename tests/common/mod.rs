#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;

use posts_api::auth::JwtAuthenticator;
use posts_api::config::AppConfig;
use posts_api::database::{MemoryPostStore, Post, PostFactory, PostStore};
use posts_api::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// A router served on a free local port, backed by an in-memory store.
/// Each test gets its own server so state never leaks between tests.
pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryPostStore>,
    pub token: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let auth = JwtAuthenticator::new(TEST_SECRET, 1)?;
        let token = auth.issue("tester")?;
        let store = Arc::new(MemoryPostStore::new());

        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        let app = posts_api::app(AppState::new(store.clone(), Arc::new(auth)), &config);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url,
            store,
            token,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub async fn seed(&self, count: usize) -> Result<Vec<Post>> {
        Ok(PostFactory::create_many(self.store.as_ref(), count).await?)
    }

    pub async fn stored(&self) -> Result<Vec<Post>> {
        Ok(self.store.find_all().await?)
    }
}

/// `count` filler words, as a title or content would contain
pub fn words(count: usize) -> String {
    vec!["word"; count].join(" ")
}

/// (field, rule) pairs of a 422 body, in order
pub fn field_rules(body: &Value) -> Vec<(String, String)> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| {
                    (
                        e["field"].as_str().unwrap_or_default().to_string(),
                        e["rule"].as_str().unwrap_or_default().to_string(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
