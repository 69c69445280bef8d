//! Lesson test factory for creating test quiz entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a lesson test with one sample question under the given lesson.
pub async fn create_lesson_test(
    db: &DatabaseConnection,
    lesson_id: &str,
) -> Result<entity::lesson_test::Model, DbErr> {
    entity::lesson_test::ActiveModel {
        id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
        lesson_id: ActiveValue::Set(lesson_id.to_string()),
        number: ActiveValue::Set(Some(1)),
        title: ActiveValue::Set(format!("Test {}", next_id())),
        description: ActiveValue::Set(None),
        questions: ActiveValue::Set(serde_json::json!([{
            "question": "2 + 2 = ?",
            "a": "3",
            "b": "4",
            "c": "5",
            "d": "22",
            "answer": "b"
        }])),
        status: ActiveValue::Set(1),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
