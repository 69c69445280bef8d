//! Chapter data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{chapter::UpdateChapterParams, role::ContentStatus},
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for chapters.
pub struct ChapterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active chapter with an explicit number.
    pub async fn create(
        &self,
        course_id: &str,
        number: i32,
        title: String,
        description: Option<String>,
    ) -> Result<entity::chapter::Model, DbErr> {
        entity::chapter::ActiveModel {
            id: ActiveValue::Set(new_id()),
            course_id: ActiveValue::Set(normalize_id(course_id)),
            number: ActiveValue::Set(number),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            status: ActiveValue::Set(ContentStatus::Active.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::chapter::Model>, DbErr> {
        entity::prelude::Chapter::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    /// Gets the chapters of a course ordered by number.
    pub async fn get_by_course(&self, course_id: &str) -> Result<Vec<entity::chapter::Model>, DbErr> {
        entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::CourseId.eq(normalize_id(course_id)))
            .order_by_asc(entity::chapter::Column::Number)
            .all(self.db)
            .await
    }

    pub async fn count_by_course(&self, course_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::CourseId.eq(normalize_id(course_id)))
            .count(self.db)
            .await
    }

    /// Gets the highest chapter number in a course, `None` when it has no chapters.
    pub async fn max_number(&self, course_id: &str) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::CourseId.eq(normalize_id(course_id)))
            .order_by_desc(entity::chapter::Column::Number)
            .one(self.db)
            .await?;

        Ok(last.map(|chapter| chapter.number))
    }

    /// Checks whether another chapter of the course already uses `number`.
    ///
    /// # Arguments
    /// - `course_id` - Course to look in
    /// - `number` - Chapter number to check
    /// - `except_id` - Chapter to ignore, used when renumbering an existing chapter
    pub async fn number_taken(
        &self,
        course_id: &str,
        number: i32,
        except_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::CourseId.eq(normalize_id(course_id)))
            .filter(entity::chapter::Column::Number.eq(number));

        if let Some(id) = except_id {
            query = query.filter(entity::chapter::Column::Id.ne(normalize_id(id)));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update to a chapter.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated chapter
    /// - `Ok(None)` - No chapter with that id
    pub async fn update(
        &self,
        id: &str,
        params: UpdateChapterParams,
    ) -> Result<Option<entity::chapter::Model>, DbErr> {
        let Some(chapter) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::chapter::ActiveModel = chapter.clone().into();
        if let Some(number) = params.number {
            active.number = ActiveValue::Set(number);
        }
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.id());
        }

        if !active.is_changed() {
            return Ok(Some(chapter));
        }

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Chapter::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
