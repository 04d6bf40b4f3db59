//! Persistence access for course records

use course_db_entity::course;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

/// Thin wrapper around the database connection exposing the course table
/// operations the resolvers need. Identifier assignment, ordering and
/// isolation are all delegated to the underlying database.
#[derive(Debug, Clone)]
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new course; the identifier is assigned by the database.
    /// Name and description are stored as given, empty or absent included.
    pub async fn save(
        &self,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<course::Model, DbErr> {
        course::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(id).one(&self.db).await
    }

    /// All persisted courses, in whatever order the database returns them
    pub async fn find_all(&self) -> Result<Vec<course::Model>, DbErr> {
        course::Entity::find().all(&self.db).await
    }
}
