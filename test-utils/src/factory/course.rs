//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: String,
    title: String,
    description: Option<String>,
    price: i64,
    status: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory authored by `author_id`.
    ///
    /// Defaults:
    /// - title: `"Course {n}"`
    /// - description: `None`
    /// - price: `1000`
    /// - status: `1` (active)
    pub fn new(db: &'a DatabaseConnection, author_id: impl Into<String>) -> Self {
        Self {
            db,
            author_id: author_id.into(),
            title: format!("Course {}", next_id()),
            description: None,
            price: 1000,
            status: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the numeric content status (0 inactive, 1 active, 2 pending, 20 draft).
    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active course with default values for the given author.
pub async fn create_course(
    db: &DatabaseConnection,
    author_id: &str,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, author_id).build().await
}
