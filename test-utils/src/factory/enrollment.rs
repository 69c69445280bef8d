//! Enrollment factory for creating test purchase records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a successful enrollment of `user_id` in `course_id` with the given price paid.
pub async fn create_enrollment_with_price(
    db: &DatabaseConnection,
    user_id: &str,
    course_id: &str,
    price: i64,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        course_id: ActiveValue::Set(course_id.to_string()),
        price: ActiveValue::Set(price),
        payment_status: ActiveValue::Set(1),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a free successful enrollment of `user_id` in `course_id`.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: &str,
    course_id: &str,
) -> Result<entity::enrollment::Model, DbErr> {
    create_enrollment_with_price(db, user_id, course_id, 0).await
}
