//! Common test utilities for API integration tests
//!
//! Provides an in-memory SQLite database with migrations applied and a
//! scripted student service standing in for the remote collaborator, so
//! tests exercise the schema end to end without external processes.

#![allow(dead_code)]

use axum::{extract::State, routing::post, Json, Router};
use course_api::{
    client::StudentServiceClient,
    schema::{build_schema, CourseSchema},
    store::CourseStore,
};
use course_db_entity::course;
use course_db_migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use tokio::net::TcpListener;
use url::Url;

/// Test context containing the components needed for schema-level tests
pub struct TestContext {
    pub db: DatabaseConnection,
    pub store: CourseStore,
    pub schema: CourseSchema,
}

/// Connect an in-memory SQLite database and apply migrations
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Insert a course row with an explicit identifier
pub async fn insert_course(db: &DatabaseConnection, id: i64, name: &str) -> anyhow::Result<course::Model> {
    let model = course::ActiveModel {
        id: Set(id),
        name: Set(Some(name.to_string())),
        description: Set(Some(format!("{} description", name))),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Spawn a scripted student service returning `response` for every GraphQL
/// call, and return its endpoint URL.
pub async fn spawn_student_service(response: serde_json::Value) -> anyhow::Result<Url> {
    async fn graphql(State(response): State<serde_json::Value>) -> Json<serde_json::Value> {
        Json(response)
    }

    let app = Router::new().route("/graphql", post(graphql)).with_state(response);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}/graphql", addr).parse()?)
}

/// Build a schema backed by a fresh database and a student service that
/// always answers with `student_response`.
pub async fn setup_test_context(student_response: serde_json::Value) -> anyhow::Result<TestContext> {
    let db = setup_test_db().await?;
    let store = CourseStore::new(db.clone());
    let endpoint = spawn_student_service(student_response).await?;
    let schema = build_schema(store.clone(), StudentServiceClient::new(endpoint));

    Ok(TestContext { db, store, schema })
}

/// Build a schema whose student service endpoint is unreachable, to
/// exercise transport-failure paths.
pub async fn setup_test_context_without_student_service() -> anyhow::Result<TestContext> {
    let db = setup_test_db().await?;
    let store = CourseStore::new(db.clone());
    // Nothing listens on the discard port; calls fail at connect time.
    let endpoint: Url = "http://127.0.0.1:9/graphql".parse()?;
    let schema = build_schema(store.clone(), StudentServiceClient::new(endpoint));

    Ok(TestContext { db, store, schema })
}

/// Execute a GraphQL request and return the serialized response
pub async fn execute(schema: &CourseSchema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    serde_json::to_value(response).expect("response must serialize")
}
