//! Lesson attachment management. Attachments carry a URL only.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::attachment::AttachmentRepository,
    error::AppError,
    model::attachment::{Attachment, CreateAttachmentParams, UpdateAttachmentParams},
};

pub struct AttachmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttachmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Attachment, AppError> {
        let Some(attachment) = AttachmentRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Attachment not found!".to_string()));
        };

        Attachment::from_entity(attachment)
    }

    pub async fn create(&self, params: CreateAttachmentParams) -> Result<Attachment, AppError> {
        let attachment = AttachmentRepository::new(self.db).create(params).await?;

        Attachment::from_entity(attachment)
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdateAttachmentParams,
    ) -> Result<Attachment, AppError> {
        let Some(attachment) = AttachmentRepository::new(self.db).update(id, params).await? else {
            return Err(AppError::NotFound("Attachment not found!".to_string()));
        };

        Attachment::from_entity(attachment)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if AttachmentRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("Attachment not found!".to_string()));
        }

        Ok(())
    }
}
