//! Enrollment data repository.
//!
//! An enrollment row is the only evidence that a learner may read a course, so
//! `exists` backs every read decision of the access-control engine.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::enrollment::PAYMENT_SUCCEEDED,
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for enrollments.
pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a successful purchase of `course_id` by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created enrollment
    /// - `Err(DbErr)` - Database error, including the unique (user, course) violation
    pub async fn create(
        &self,
        user_id: &str,
        course_id: &str,
        price: i64,
    ) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            id: ActiveValue::Set(new_id()),
            user_id: ActiveValue::Set(normalize_id(user_id)),
            course_id: ActiveValue::Set(normalize_id(course_id)),
            price: ActiveValue::Set(price),
            payment_status: ActiveValue::Set(PAYMENT_SUCCEEDED),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Checks whether an enrollment links the user and the course.
    pub async fn exists(&self, user_id: &str, course_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(normalize_id(user_id)))
            .filter(entity::enrollment::Column::CourseId.eq(normalize_id(course_id)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a user's enrollments, newest first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(normalize_id(user_id)))
            .order_by_desc(entity::enrollment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets every enrollment, used by the report aggregation.
    pub async fn get_all(&self) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find().all(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find().count(self.db).await
    }

    pub async fn count_by_course(&self, course_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(normalize_id(course_id)))
            .count(self.db)
            .await
    }

    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(normalize_id(user_id)))
            .count(self.db)
            .await
    }
}
