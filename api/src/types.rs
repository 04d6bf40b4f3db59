//! GraphQL type definitions for the course API
//!
//! `Course` is owned by this service; `Student` is a federated entity for
//! which this service only contributes the `courseList` field.

use async_graphql::{ComplexObject, Context, ErrorExtensions, Result, SimpleObject, ID};

use crate::{client::StudentServiceClient, errors::ServiceError, store::CourseStore};

/// Course record exposed by this service
#[derive(SimpleObject, Clone, Debug)]
pub struct Course {
    pub id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Federated student entity.
///
/// Locally this is an id-only stub: the entity resolver populates the key
/// and every other student field lives in the student service. The
/// `courseList` field below enriches the stub on demand.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex, fake)]
pub struct Student {
    #[graphql(skip)]
    pub id: i64,
}

#[ComplexObject]
impl Student {
    /// Student identifier (federation key)
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    /// Courses the student is enrolled in.
    ///
    /// Fetches the authoritative student record from the student service,
    /// then maps each referenced course id to a local store lookup in the
    /// order received. The first missing course aborts the whole join; no
    /// partial list is ever returned.
    async fn course_list(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let store = ctx.data::<CourseStore>()?;
        let client = ctx.data::<StudentServiceClient>()?;

        let student = client.fetch_student(self.id).await.map_err(|e| e.extend())?;

        let mut courses = Vec::with_capacity(student.course_ids.len());
        for course_id in student.course_ids {
            let course = store
                .find_by_id(course_id)
                .await
                .map_err(|e| ServiceError::from(e).extend())?
                .ok_or_else(|| ServiceError::CourseNotFound(course_id).extend())?;
            courses.push(Course::from(course));
        }

        Ok(courses)
    }
}
