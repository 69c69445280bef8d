//! Lesson comment management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Comment, AppError> {
        let Some(comment) = CommentRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Comment not found!".to_string()));
        };

        Ok(Comment::from_entity(comment))
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let comment = CommentRepository::new(self.db).create(params).await?;

        Ok(Comment::from_entity(comment))
    }

    pub async fn update(&self, id: &str, content: String) -> Result<Comment, AppError> {
        let Some(comment) = CommentRepository::new(self.db)
            .update_content(id, content)
            .await?
        else {
            return Err(AppError::NotFound("Comment not found!".to_string()));
        };

        Ok(Comment::from_entity(comment))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if CommentRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("Comment not found!".to_string()));
        }

        Ok(())
    }
}
