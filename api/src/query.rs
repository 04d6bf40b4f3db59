//! GraphQL query root and the federation entity resolver

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    errors::ServiceError,
    store::CourseStore,
    types::{Course, Student},
};

/// Parse a caller-supplied GraphQL ID into a numeric identifier
pub(crate) fn parse_id(id: &ID) -> Result<i64> {
    id.parse::<i64>()
        .map_err(|_| ServiceError::InvalidId(id.to_string()).extend())
}

/// Root query type for the course service
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Find a course by its identifier
    ///
    /// Returns a COURSE_NOT_FOUND_ERROR if no course exists under the id.
    async fn find_course(&self, ctx: &Context<'_>, id: ID) -> Result<Course> {
        let store = ctx.data::<CourseStore>()?;
        let course_id = parse_id(&id)?;

        store
            .find_by_id(course_id)
            .await
            .map_err(|e| ServiceError::from(e).extend())?
            .map(Course::from)
            .ok_or_else(|| ServiceError::CourseNotFound(course_id).extend())
    }

    /// All available courses, in store order
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let store = ctx.data::<CourseStore>()?;

        let courses = store
            .find_all()
            .await
            .map_err(|e| ServiceError::from(e).extend())?;

        Ok(courses.into_iter().map(Course::from).collect())
    }

    /// Health check field
    ///
    /// Returns "ok" to indicate the service is running
    async fn health(&self) -> &str {
        "ok"
    }

    /// API version information
    async fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// Federation entity resolver for `Student`.
    ///
    /// Returns an id-only stub; enrichment happens in `Student.courseList`,
    /// so resolving the reference alone never calls the student service.
    #[graphql(entity)]
    async fn find_student_by_id(&self, #[graphql(key)] id: ID) -> Result<Student> {
        Ok(Student { id: parse_id(&id)? })
    }
}
