//! Lesson comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub lesson_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            user_id: entity.user_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            lesson_id: self.lesson_id,
            user_id: self.user_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub lesson_id: String,
    pub user_id: String,
    pub content: String,
}
