//! Error types and classification for the course API
//!
//! This module provides:
//! - Server-level errors (`ApiError`) for infrastructure failures
//! - Domain errors (`ServiceError`) raised during field resolution
//! - The single translation point from domain errors to the GraphQL error
//!   payload (`classification` tag plus `status` extension)

use async_graphql::ErrorExtensions;
use thiserror::Error;
use tracing::error;

/// Message returned to clients for errors that carry no classification of
/// their own. The underlying detail is only logged server-side.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

// ============================================================================
// Server-Level Errors
// ============================================================================

/// API-related errors for server infrastructure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server binding error
    #[error("Failed to bind server: {0}")]
    BindError(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// Domain Errors
// ============================================================================

/// Errors raised while resolving course and student fields.
///
/// The two not-found variants are part of the API contract; everything else
/// is flattened to a generic internal error before it reaches a client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Course with id {0} not found")]
    CourseNotFound(i64),

    #[error("Student with id {0} not found")]
    StudentNotFound(i64),

    /// Request to the student service failed at the transport level
    #[error("student service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Course store failure
    #[error("database query failed: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A caller-supplied identifier that is not a valid course/student id
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// Classification tags attached to outbound GraphQL errors.
///
/// Closed enumeration; clients switch on the tag, not the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    InternalServerError,
    CourseNotFoundError,
    StudentNotFoundError,
}

impl ErrorClassification {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorClassification::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorClassification::CourseNotFoundError => "COURSE_NOT_FOUND_ERROR",
            ErrorClassification::StudentNotFoundError => "STUDENT_NOT_FOUND_ERROR",
        }
    }
}

impl ServiceError {
    /// Classification tag reported in the error extensions
    pub fn classification(&self) -> ErrorClassification {
        match self {
            ServiceError::CourseNotFound(_) => ErrorClassification::CourseNotFoundError,
            ServiceError::StudentNotFound(_) => ErrorClassification::StudentNotFoundError,
            _ => ErrorClassification::InternalServerError,
        }
    }

    /// HTTP-style status code reported in the error extensions
    pub fn status(&self) -> i32 {
        match self.classification() {
            ErrorClassification::CourseNotFoundError | ErrorClassification::StudentNotFoundError => 404,
            ErrorClassification::InternalServerError => 500,
        }
    }

    /// Message exposed to clients. Not-found errors carry the offending
    /// identifier; everything else gets the fixed generic text so internal
    /// detail never leaks into a response.
    pub fn client_message(&self) -> String {
        match self.classification() {
            ErrorClassification::InternalServerError => GENERIC_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> async_graphql::Error {
        // Log the original error with full detail before the flattened
        // payload goes out. Path and locations are attached by the GraphQL
        // executor per failing field.
        match self.classification() {
            ErrorClassification::CourseNotFoundError => error!("Course not found: {}", self),
            ErrorClassification::StudentNotFoundError => error!("Student not found: {}", self),
            ErrorClassification::InternalServerError => error!("Unexpected error: {}", self),
        }

        async_graphql::Error::new(self.client_message()).extend_with(|_, e| {
            e.set("classification", self.classification().as_str());
            e.set("status", self.status());
        })
    }
}
