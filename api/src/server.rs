//! Axum HTTP server configuration with GraphQL support

use std::sync::Arc;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use url::Url;

use crate::{
    client::StudentServiceClient,
    config::ApiConfig,
    errors::{ApiError, ApiResult},
    schema::{build_schema, CourseSchema},
    store::CourseStore,
};

/// Health check response for liveness probe
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: &'static str,
}

/// Readiness check response
#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    version: &'static str,
    checks: ReadinessChecks,
}

#[derive(Serialize)]
struct ReadinessChecks {
    database: CheckStatus,
}

#[derive(Serialize)]
struct CheckStatus {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: Arc<CourseSchema>,
    pub playground_enabled: bool,
    pub db: DatabaseConnection,
}

/// Build the Axum application router
pub fn build_app(db: DatabaseConnection, config: ApiConfig) -> ApiResult<Router> {
    let endpoint: Url = config
        .student_service_url
        .parse()
        .map_err(|e| ApiError::ConfigError(format!("invalid student service URL: {}", e)))?;

    let store = CourseStore::new(db.clone());
    let client = StudentServiceClient::new(endpoint);
    let schema = build_schema(store, client);

    let app_state = AppState {
        schema: Arc::new(schema),
        playground_enabled: config.playground_enabled,
        db,
    };

    // Configure CORS based on allowed origins
    let cors_layer = if config.cors_allowed_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let allowed_origins: Vec<_> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    };

    Ok(Router::new()
        // GraphQL endpoint (queries and mutations)
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        // Health check endpoints for liveness/readiness probes
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    let request = match serde_json::from_value::<async_graphql::Request>(request) {
        Ok(req) => req,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "errors": [{
                        "message": format!("Invalid GraphQL request: {}", e)
                    }]
                })),
            )
                .into_response();
        }
    };

    let response = state.schema.execute(request).await;

    Json(serde_json::to_value(response).unwrap_or_else(|_| {
        serde_json::json!({
            "errors": [{"message": "Failed to serialize response"}]
        })
    }))
    .into_response()
}

/// GraphQL Playground UI (only enabled if playground_enabled config is true)
async fn graphql_playground(State(state): State<AppState>) -> impl IntoResponse {
    if state.playground_enabled {
        Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            "GraphQL Playground is disabled. Use POST /graphql for queries.",
        )
            .into_response()
    }
}

/// Liveness probe endpoint - minimal check that the process is alive
async fn healthz_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe endpoint - verifies the database is reachable
async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match state.db.ping().await {
        Ok(()) => (
            "ready",
            CheckStatus {
                status: "healthy".to_string(),
                error: None,
            },
        ),
        Err(e) => (
            "not_ready",
            CheckStatus {
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            },
        ),
    };

    let response = ReadinessResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        checks: ReadinessChecks { database },
    };

    if response.status == "ready" {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
