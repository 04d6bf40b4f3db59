//! GraphQL schema builder for the course API

use async_graphql::{EmptySubscription, SDLExportOptions, Schema};

use crate::{client::StudentServiceClient, mutation::MutationRoot, query::QueryRoot, store::CourseStore};

/// Schema type served by the course API
pub type CourseSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the async-graphql schema with its collaborators injected as
/// context data.
///
/// The schema is configured with:
/// - Federation support (`Student` entity resolution)
/// - Course store and student service client as context data
/// - Query depth limit (10 levels) to prevent excessive nesting
/// - Query complexity limit (100 points) to prevent expensive operations
pub fn build_schema(store: CourseStore, client: StudentServiceClient) -> CourseSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .enable_federation()
        .limit_depth(10)
        .limit_complexity(100)
        .data(store)
        .data(client)
        .finish()
}

/// Export the GraphQL schema in federation-enabled SDL format.
///
/// Context data is only needed at execution time, so the SDL can be
/// generated without a database connection.
pub fn export_schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .enable_federation()
        .finish()
        .sdl_with_options(SDLExportOptions::new().federation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_exposes_course_operations() {
        let sdl = export_schema_sdl();
        assert!(sdl.contains("findCourse"));
        assert!(sdl.contains("courses"));
        assert!(sdl.contains("addCourse"));
    }

    #[test]
    fn test_sdl_marks_student_as_entity() {
        let sdl = export_schema_sdl();
        assert!(sdl.contains("type Student"));
        assert!(sdl.contains("@key"));
        assert!(sdl.contains("courseList"));
    }
}
