mod common;

use anyhow::Result;
use axum::http::Method;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn privileged_action_without_header_is_rejected_before_upstream() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .client
        .post(app.url("/api/projects"))
        .json(&json!({"title": "t", "description": "d"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Missing authorization header");

    assert!(
        app.upstream.recorded().is_empty(),
        "no upstream call of any kind without an Authorization header"
    );
    Ok(())
}

#[tokio::test]
async fn rejected_token_blocks_the_mutation() -> Result<()> {
    let app = common::spawn_app().await?;
    app.reject_tokens();

    let res = app
        .client
        .post(app.url("/api/projects"))
        .bearer_auth("expired-token")
        .json(&json!({"title": "t", "description": "d"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    // Generic message; the upstream's "JWT expired" detail must not leak.
    assert_eq!(body["message"], "Invalid or expired token");

    let verifies = app.upstream.recorded_for(&Method::GET, "/auth/v1/user");
    assert_eq!(verifies.len(), 1, "exactly one verification round trip");
    assert!(
        app.upstream.recorded_for(&Method::POST, "/rest/v1/projects").is_empty(),
        "mutation must never be issued on a rejected token"
    );
    Ok(())
}

#[tokio::test]
async fn verification_forwards_token_with_anon_credential() -> Result<()> {
    let app = common::spawn_app().await?;
    app.accept_tokens();
    app.upstream.respond(
        Method::POST,
        "/rest/v1/skills",
        StatusCode::CREATED,
        r#"[{"id":"s1","name":"Rust","level":90,"category":"backend"}]"#,
    );

    let res = app
        .client
        .post(app.url("/api/skills"))
        .bearer_auth("good-token")
        .json(&json!({"name": "Rust", "level": 90, "category": "backend"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let verifies = app.upstream.recorded_for(&Method::GET, "/auth/v1/user");
    assert_eq!(verifies.len(), 1);
    assert_eq!(verifies[0].header("apikey"), Some("anon-key"));
    assert_eq!(verifies[0].header("authorization"), Some("Bearer good-token"));
    Ok(())
}

#[tokio::test]
async fn every_privileged_request_reverifies() -> Result<()> {
    let app = common::spawn_app().await?;
    app.accept_tokens();
    app.upstream
        .respond(Method::DELETE, "/rest/v1/skills", StatusCode::NO_CONTENT, "");

    for _ in 0..2 {
        let res = app
            .client
            .delete(app.url("/api/skills/s1"))
            .bearer_auth("good-token")
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    // No caching of validity: one verification per privileged request.
    let verifies = app.upstream.recorded_for(&Method::GET, "/auth/v1/user");
    assert_eq!(verifies.len(), 2);
    Ok(())
}
