mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_update_read_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let handle = common::unique_handle("author");
    let (token, user_id) = common::register_and_login(&server.base_url, &handle).await?;

    // Create
    let res = client
        .post(format!("{}/posts", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "text_content": "hello" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["text_content"], "hello");
    assert_eq!(body["data"]["author"], user_id.as_str());
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    // Update as the author
    let res = client
        .put(format!("{}/posts/{}", server.base_url, post_id))
        .bearer_auth(&token)
        .json(&json!({ "text_content": "edited" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["text_content"], "edited");

    // Read back without any credential (reads are public)
    let res = client
        .get(format!("{}/posts/{}", server.base_url, post_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["text_content"], "edited");
    assert_eq!(body["data"]["author"], user_id.as_str());
    Ok(())
}

#[tokio::test]
async fn non_author_cannot_update_or_delete() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let author = common::unique_handle("owner");
    let (author_token, _) = common::register_and_login(&server.base_url, &author).await?;
    let post_id = common::create_post(&server.base_url, &author_token, "mine").await?;

    let intruder = common::unique_handle("intruder");
    let (intruder_token, _) = common::register_and_login(&server.base_url, &intruder).await?;

    // PUT as someone else
    let res = client
        .put(format!("{}/posts/{}", server.base_url, post_id))
        .bearer_auth(&intruder_token)
        .json(&json!({ "text_content": "hijacked" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "FORBIDDEN");

    // DELETE as someone else
    let res = client
        .delete(format!("{}/posts/{}", server.base_url, post_id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The post must be untouched
    let res = client
        .get(format!("{}/posts/{}", server.base_url, post_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["text_content"], "mine");
    Ok(())
}

#[tokio::test]
async fn delete_then_read_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let handle = common::unique_handle("deleter");
    let (token, _) = common::register_and_login(&server.base_url, &handle).await?;
    let post_id = common::create_post(&server.base_url, &token, "ephemeral").await?;

    let res = client
        .delete(format!("{}/posts/{}", server.base_url, post_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["deleted"], true);

    let res = client
        .get(format!("{}/posts/{}", server.base_url, post_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn reply_references_parent() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let handle = common::unique_handle("threader");
    let (token, _) = common::register_and_login(&server.base_url, &handle).await?;
    let parent_id = common::create_post(&server.base_url, &token, "root of thread").await?;

    let res = client
        .post(format!("{}/posts", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "text_content": "a reply", "parent": parent_id }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["parent"], parent_id.as_str());
    Ok(())
}

#[tokio::test]
async fn missing_parent_is_not_found_and_nothing_is_inserted() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let handle = common::unique_handle("orphan");
    let (token, _) = common::register_and_login(&server.base_url, &handle).await?;

    let res = client
        .post(format!("{}/posts", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "text_content": "reply to nothing",
            "parent": "00000000-0000-0000-0000-000000000001"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn empty_text_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let handle = common::unique_handle("empty");
    let (token, _) = common::register_and_login(&server.base_url, &handle).await?;

    let res = client
        .post(format!("{}/posts", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "text_content": "   " }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn unknown_post_read_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/posts/00000000-0000-0000-0000-0000000000ff",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
