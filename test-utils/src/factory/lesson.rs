//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons with customizable fields.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    chapter_id: String,
    position: i32,
    title: String,
    url: String,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory under `chapter_id`.
    ///
    /// Defaults:
    /// - position: `1`
    /// - title: `"Lesson {n}"`
    /// - url: `"https://videos.example.com/{n}"`
    pub fn new(db: &'a DatabaseConnection, chapter_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            chapter_id: chapter_id.into(),
            position: 1,
            title: format!("Lesson {}", n),
            url: format!("https://videos.example.com/{}", n),
        }
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the lesson entity into the database.
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            chapter_id: ActiveValue::Set(self.chapter_id),
            position: ActiveValue::Set(self.position),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            url: ActiveValue::Set(self.url),
            status: ActiveValue::Set(1),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values under the given chapter.
pub async fn create_lesson(
    db: &DatabaseConnection,
    chapter_id: &str,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, chapter_id).build().await
}
