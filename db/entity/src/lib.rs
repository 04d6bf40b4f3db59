//! SeaORM entities for the course service database.

pub mod course;

pub mod prelude {
    pub use super::course::Entity as Course;
}
