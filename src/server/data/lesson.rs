//! Lesson data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::{lesson::UpdateLessonParams, role::ContentStatus},
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for lessons.
pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active lesson at an explicit position.
    pub async fn create(
        &self,
        chapter_id: &str,
        position: i32,
        title: String,
        description: Option<String>,
        url: String,
    ) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            id: ActiveValue::Set(new_id()),
            chapter_id: ActiveValue::Set(normalize_id(chapter_id)),
            position: ActiveValue::Set(position),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            url: ActiveValue::Set(url),
            status: ActiveValue::Set(ContentStatus::Active.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    /// Gets the lessons of several chapters ordered by position.
    pub async fn get_by_chapters(
        &self,
        chapter_ids: Vec<String>,
    ) -> Result<Vec<entity::lesson::Model>, DbErr> {
        if chapter_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::ChapterId.is_in(chapter_ids))
            .order_by_asc(entity::lesson::Column::Position)
            .order_by_asc(entity::lesson::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the lessons of one chapter ordered by position.
    pub async fn get_by_chapter(&self, chapter_id: &str) -> Result<Vec<entity::lesson::Model>, DbErr> {
        self.get_by_chapters(vec![normalize_id(chapter_id)]).await
    }

    /// Highest position used in a chapter, `None` when it has no lessons.
    pub async fn max_position(&self, chapter_id: &str) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::ChapterId.eq(normalize_id(chapter_id)))
            .order_by_desc(entity::lesson::Column::Position)
            .one(self.db)
            .await?;

        Ok(last.map(|lesson| lesson.position))
    }

    /// Applies a partial update to a lesson.
    pub async fn update(
        &self,
        id: &str,
        params: UpdateLessonParams,
    ) -> Result<Option<entity::lesson::Model>, DbErr> {
        let Some(lesson) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::lesson::ActiveModel = lesson.clone().into();
        if let Some(position) = params.position {
            active.position = ActiveValue::Set(position);
        }
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(url) = params.url {
            active.url = ActiveValue::Set(url);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.id());
        }

        if !active.is_changed() {
            return Ok(Some(lesson));
        }

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Lesson::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
