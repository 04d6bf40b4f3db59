//! course-api - Federated GraphQL API server for course records
//!
//! This crate provides a GraphQL API server built with Axum and
//! async-graphql. It owns course records in its own database and
//! participates in a federated graph by resolving the `Student` entity's
//! `courseList` field against a remote student service.

pub mod client;
pub mod config;
pub mod conversions;
pub mod documents;
pub mod errors;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod server;
pub mod store;
pub mod types;

use axum::serve;
use config::ApiConfig;
use course_db_migration::{Migrator, MigratorTrait};
use errors::ApiResult;
use sea_orm::Database;
use tokio::net::TcpListener;
use tracing::info;

/// Redact credentials from a database URL for safe logging
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.find('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***{}", &url[..scheme_end + 3], &url[at_pos..])
        }
        _ => url.to_string(),
    }
}

/// Start the API server
pub async fn start_server(config: ApiConfig) -> ApiResult<()> {
    info!("Starting course API server on {}", config.bind_address);
    info!("Connecting to database: {}", redact_url(&config.database_url));

    let db = Database::connect(&config.database_url).await?;
    info!("Database connection established");

    Migrator::up(&db, None).await?;

    let app = server::build_app(db, config.clone())?;

    let listener = TcpListener::bind(config.bind_address).await?;

    info!("GraphQL endpoint: http://{}/graphql", config.bind_address);
    if config.playground_enabled {
        info!("GraphQL Playground: http://{}/graphql", config.bind_address);
    }
    info!("Student service endpoint: {}", config.student_service_url);

    serve(listener, app).await?;

    Ok(())
}
