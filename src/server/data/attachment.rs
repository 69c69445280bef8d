//! Attachment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        attachment::{CreateAttachmentParams, UpdateAttachmentParams},
        role::ContentStatus,
    },
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for lesson attachments.
pub struct AttachmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttachmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAttachmentParams,
    ) -> Result<entity::attachment::Model, DbErr> {
        entity::attachment::ActiveModel {
            id: ActiveValue::Set(new_id()),
            lesson_id: ActiveValue::Set(normalize_id(&params.lesson_id)),
            number: ActiveValue::Set(params.number),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            url: ActiveValue::Set(params.url),
            status: ActiveValue::Set(ContentStatus::Active.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::attachment::Model>, DbErr> {
        entity::prelude::Attachment::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    pub async fn get_by_lesson(
        &self,
        lesson_id: &str,
    ) -> Result<Vec<entity::attachment::Model>, DbErr> {
        entity::prelude::Attachment::find()
            .filter(entity::attachment::Column::LessonId.eq(normalize_id(lesson_id)))
            .order_by_asc(entity::attachment::Column::Number)
            .order_by_asc(entity::attachment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdateAttachmentParams,
    ) -> Result<Option<entity::attachment::Model>, DbErr> {
        let Some(attachment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::attachment::ActiveModel = attachment.clone().into();
        if let Some(number) = params.number {
            active.number = ActiveValue::Set(Some(number));
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
            return Ok(Some(attachment));
        }

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Attachment::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
