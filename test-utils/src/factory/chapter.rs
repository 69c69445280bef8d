//! Chapter factory for creating test chapter entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chapters with customizable fields.
pub struct ChapterFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: String,
    number: i32,
    title: String,
}

impl<'a> ChapterFactory<'a> {
    /// Creates a new ChapterFactory under `course_id`.
    ///
    /// Defaults:
    /// - number: `1`
    /// - title: `"Chapter {n}"`
    pub fn new(db: &'a DatabaseConnection, course_id: impl Into<String>) -> Self {
        Self {
            db,
            course_id: course_id.into(),
            number: 1,
            title: format!("Chapter {}", next_id()),
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the chapter entity into the database.
    pub async fn build(self) -> Result<entity::chapter::Model, DbErr> {
        entity::chapter::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            course_id: ActiveValue::Set(self.course_id),
            number: ActiveValue::Set(self.number),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(1),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates chapter number 1 under the given course.
pub async fn create_chapter(
    db: &DatabaseConnection,
    course_id: &str,
) -> Result<entity::chapter::Model, DbErr> {
    ChapterFactory::new(db, course_id).build().await
}
