//! Conversions between database models and GraphQL types

use async_graphql::ID;
use course_db_entity::course;

use crate::types::Course;

impl From<course::Model> for Course {
    fn from(model: course::Model) -> Self {
        Course {
            id: ID(model.id.to_string()),
            name: model.name,
            description: model.description,
        }
    }
}
