//! Attachment domain models and parameters.

use crate::{
    model::attachment::AttachmentDto,
    server::{error::AppError, model::role::ContentStatus},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub id: String,
    pub lesson_id: String,
    pub number: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub status: ContentStatus,
}

impl Attachment {
    pub fn from_entity(entity: entity::attachment::Model) -> Result<Self, AppError> {
        Ok(Self {
            status: ContentStatus::try_from(entity.status)?,
            id: entity.id,
            lesson_id: entity.lesson_id,
            number: entity.number,
            title: entity.title,
            description: entity.description,
            url: entity.url,
        })
    }

    pub fn into_dto(self) -> AttachmentDto {
        AttachmentDto {
            id: self.id,
            lesson_id: self.lesson_id,
            number: self.number,
            title: self.title,
            description: self.description,
            url: self.url,
            status: self.status.name().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAttachmentParams {
    pub lesson_id: String,
    pub number: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAttachmentParams {
    pub number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub status: Option<ContentStatus>,
}
