//! GraphQL mutation root

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{errors::ServiceError, store::CourseStore, types::Course};

/// Root mutation type for the course service
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a new course.
    ///
    /// Name and description are persisted as given; blank or absent values
    /// are accepted. The identifier is assigned by the store.
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Course> {
        let store = ctx.data::<CourseStore>()?;

        let course = store
            .save(name, description)
            .await
            .map_err(|e| ServiceError::from(e).extend())?;

        Ok(course.into())
    }
}
