//! Course data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        course::{CreateCourseParams, UpdateCourseParams},
        role::ContentStatus,
    },
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for courses.
pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new course.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created course
    /// - `Err(DbErr)` - Database error, including a missing author
    pub async fn create(&self, params: CreateCourseParams) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(new_id()),
            author_id: ActiveValue::Set(normalize_id(&params.author_id)),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Finds a course by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    /// Gets active courses with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((courses, total))` - Courses of the requested page and total active course count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::course::Model>, u64), DbErr> {
        let paginator = entity::prelude::Course::find()
            .filter(entity::course::Column::Status.eq(ContentStatus::Active.id()))
            .order_by_desc(entity::course::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let courses = paginator.fetch_page(page).await?;

        Ok((courses, total))
    }

    /// Gets every course written by an author, newest first.
    pub async fn get_by_author(&self, author_id: &str) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::AuthorId.eq(normalize_id(author_id)))
            .order_by_desc(entity::course::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the courses with the given ids, newest first.
    pub async fn get_by_ids(&self, ids: Vec<String>) -> Result<Vec<entity::course::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids))
            .order_by_desc(entity::course::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets every course.
    pub async fn get_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find().all(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }

    pub async fn count_by_author(&self, author_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::AuthorId.eq(normalize_id(author_id)))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a course.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated course
    /// - `Ok(None)` - No course with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: &str,
        params: UpdateCourseParams,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        let Some(course) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::course::ActiveModel = course.clone().into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.id());
        }

        if !active.is_changed() {
            return Ok(Some(course));
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a course and, through cascading keys, its whole content tree.
    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
