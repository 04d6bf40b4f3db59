//! Integration tests for the HTTP surface of the API server
//!
//! These tests build the full Axum router against an in-memory SQLite
//! database and drive it with `tower::ServiceExt::oneshot`, covering the
//! probe endpoints and the GraphQL transport.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use course_api::{config::ApiConfig, server::build_app};
use serde_json::json;
use tower::ServiceExt;

async fn test_app(config: ApiConfig) -> anyhow::Result<axum::Router> {
    let db = common::setup_test_db().await?;
    Ok(build_app(db, config)?)
}

async fn body_json(response: axum::response::Response) -> anyhow::Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[test_log::test(tokio::test)]
async fn test_healthz_returns_healthy_with_version() -> anyhow::Result<()> {
    let app = test_app(ApiConfig::default()).await?;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_readyz_reports_database_ready() -> anyhow::Result<()> {
    let app = test_app(ApiConfig::default()).await?;

    let response = app
        .oneshot(Request::builder().uri("/readyz").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["checks"]["database"]["status"], "healthy");

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_graphql_post_executes_query() -> anyhow::Result<()> {
    let app = test_app(ApiConfig::default()).await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"query": "{ health courses { id } }"}).to_string()))?;

    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    assert_eq!(json["data"]["health"], "ok");
    assert_eq!(json["data"]["courses"], json!([]));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_graphql_post_rejects_malformed_request() -> anyhow::Result<()> {
    let app = test_app(ApiConfig::default()).await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"query": 42}).to_string()))?;

    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_playground_disabled_by_default() -> anyhow::Result<()> {
    let app = test_app(ApiConfig::default()).await?;

    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_playground_served_when_enabled() -> anyhow::Result<()> {
    let config = ApiConfig {
        playground_enabled: true,
        ..ApiConfig::default()
    };
    let app = test_app(config).await?;

    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let html = String::from_utf8(bytes.to_vec())?;
    assert!(html.contains("GraphQL Playground"));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_invalid_student_service_url_is_config_error() -> anyhow::Result<()> {
    let config = ApiConfig {
        student_service_url: "not a url".to_string(),
        ..ApiConfig::default()
    };

    let db = common::setup_test_db().await?;
    assert!(build_app(db, config).is_err());

    Ok(())
}
