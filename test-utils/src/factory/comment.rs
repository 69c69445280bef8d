//! Comment factory for creating test comment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment written by `user_id` under the given lesson.
pub async fn create_comment(
    db: &DatabaseConnection,
    lesson_id: &str,
    user_id: &str,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
        lesson_id: ActiveValue::Set(lesson_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        content: ActiveValue::Set("Great lesson!".to_string()),
        status: ActiveValue::Set(1),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
