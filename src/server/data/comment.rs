//! Lesson comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::{comment::CreateCommentParams, role::ContentStatus},
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for lesson comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(new_id()),
            lesson_id: ActiveValue::Set(normalize_id(&params.lesson_id)),
            user_id: ActiveValue::Set(normalize_id(&params.user_id)),
            content: ActiveValue::Set(params.content),
            status: ActiveValue::Set(ContentStatus::Active.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    /// Gets the comments of a lesson, oldest first.
    pub async fn get_by_lesson(&self, lesson_id: &str) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::LessonId.eq(normalize_id(lesson_id)))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Replaces the text of a comment.
    pub async fn update_content(
        &self,
        id: &str,
        content: String,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(comment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.content = ActiveValue::Set(content);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
