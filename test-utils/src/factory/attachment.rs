//! Attachment factory for creating test attachment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an attachment with default values under the given lesson.
pub async fn create_attachment(
    db: &DatabaseConnection,
    lesson_id: &str,
) -> Result<entity::attachment::Model, DbErr> {
    let n = next_id();
    entity::attachment::ActiveModel {
        id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
        lesson_id: ActiveValue::Set(lesson_id.to_string()),
        number: ActiveValue::Set(None),
        title: ActiveValue::Set(format!("Attachment {}", n)),
        description: ActiveValue::Set(None),
        url: ActiveValue::Set(format!("https://files.example.com/{}.pdf", n)),
        status: ActiveValue::Set(1),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
