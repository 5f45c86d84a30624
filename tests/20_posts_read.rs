mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn lists_all_posts() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.seed(5).await?;

    let res = server.client.get(server.url("/posts")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let expected = serde_json::to_value(server.stored().await?)?;
    assert_eq!(res.json::<Value>().await?, expected);

    Ok(())
}

#[tokio::test]
async fn lists_empty_array_when_no_posts() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server.client.get(server.url("/posts")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    Ok(())
}

#[tokio::test]
async fn shows_a_post() -> Result<()> {
    let server = TestServer::spawn().await?;
    let post = server.seed(1).await?.remove(0);

    let res = server.client.get(server.url(&format!("/posts/{}", post.id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], post.id.to_string());
    assert_eq!(body["title"], post.title.as_str());
    assert_eq!(body["content"], post.content.as_str());
    assert!(body.get("created_at").is_some());
    assert!(body.get("updated_at").is_some());

    Ok(())
}

#[tokio::test]
async fn unknown_post_is_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    for id in ["non-existing-id".to_string(), uuid::Uuid::new_v4().to_string()] {
        let res = server.client.get(server.url(&format!("/posts/{}", id))).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            res.json::<Value>().await?,
            json!({ "errors": [{ "message": "Post not found" }] })
        );
    }

    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server.client.get(format!("{}/health", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["status"], "ok");

    Ok(())
}
